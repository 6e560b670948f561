pub mod gen_funcs;
pub mod episode_page;
pub(crate) mod page;
pub(crate) mod header;
pub(crate) mod sponsors;
pub(crate) mod twitter_feed;
pub(crate) mod safehtml;

pub mod sections;
