use crate::components::gen_funcs::markdown_to_html;
use crate::components::safehtml::SafeHtml;
use crate::models::{Episode, Person};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShowNotesProps {
    pub episode: Episode,
}

fn note_list(heading: &str, notes: &[String]) -> Html {
    if notes.is_empty() {
        return html! {};
    }
    html! {
        <div class="show-notes-group">
            <h4>{ heading.to_string() }</h4>
            <ul>
                { for notes.iter().map(|note| html! {
                    <li><SafeHtml html={markdown_to_html(note)} /></li>
                })}
            </ul>
        </div>
    }
}

fn person_notes(person: &Person) -> Html {
    html! {
        <div class="show-notes-person" key={person.name.clone()}>
            <h3>{ &person.name }</h3>
            { note_list("Links", &person.links) }
            { note_list("Tips", &person.tips) }
            { note_list("Picks", &person.picks) }
        </div>
    }
}

#[function_component(ShowNotes)]
pub fn show_notes(props: &ShowNotesProps) -> Html {
    let people: Vec<&Person> = props.episode.people().filter(|p| p.has_notes()).collect();

    html! {
        <section class="show-notes">
            <h2>{"Show Notes"}</h2>
            if people.is_empty() {
                <p class="show-notes-empty">{"No show notes for this episode."}</p>
            } else {
                { for people.into_iter().map(person_notes) }
            }
        </section>
    }
}
