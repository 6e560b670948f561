use crate::components::gen_funcs::{HeadTag, MetaAttribute};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub head_tags: Vec<HeadTag>,
    #[prop_or_default]
    pub children: Html,
}

fn meta_tag(tag: &HeadTag) -> Html {
    let content = tag.content.clone();
    match tag.attribute {
        MetaAttribute::Name(name) => html! {
            <meta key={tag.key.to_string()} name={name} content={content} />
        },
        MetaAttribute::Property(property) => html! {
            <meta key={tag.key.to_string()} property={property} content={content} />
        },
    }
}

/// Document shell. The `description` meta is emitted by the caller's head tags
/// when it supplies them, so it is only written here as a fallback.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let has_description_tag = props
        .head_tags
        .iter()
        .any(|tag| tag.attribute == MetaAttribute::Name("description"));

    html! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{ props.title.clone() }</title>
                if !has_description_tag {
                    <meta name="description" content={props.description.clone()} />
                }
                { for props.head_tags.iter().map(meta_tag) }
            </head>
            <body>
                { props.children.clone() }
            </body>
        </html>
    }
}
