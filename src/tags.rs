//! Per-tag constructors.
//!
//! `tags::button("px-4", StyleOptions::new())` is the same as
//! `create("px-4", StyleOptions::new().with_as(Tag::Button))`.

use crate::style::{BaseClass, StyleOptions};
use crate::styled::StyledComponent;
use crate::target::Tag;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Signature shared by every per-tag constructor
pub type Constructor = fn(BaseClass, StyleOptions) -> StyledComponent;

macro_rules! tag_constructors {
    ($($fn_name:ident => $tag:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Styled `", stringify!($fn_name), "` element")]
            pub fn $fn_name(base: impl Into<BaseClass>, options: StyleOptions) -> StyledComponent {
                StyledComponent::for_tag(Tag::$tag, base, options)
            }
        )+

        fn constructor_table() -> IndexMap<Tag, Constructor> {
            let mut table: IndexMap<Tag, Constructor> = IndexMap::new();
            $(table.insert(Tag::$tag, |base, options| $fn_name(base, options));)+
            table
        }
    };
}

tag_constructors! {
    div => Div,
    span => Span,
    button => Button,
    a => A,
    p => P,
    h1 => H1,
    h2 => H2,
    h3 => H3,
    h4 => H4,
    h5 => H5,
    h6 => H6,
    ul => Ul,
    ol => Ol,
    li => Li,
    input => Input,
    textarea => Textarea,
    select => Select,
    label => Label,
    form => Form,
    header => Header,
    footer => Footer,
    nav => Nav,
    section => Section,
    article => Article,
    aside => Aside,
    main => Main,
    figure => Figure,
    figcaption => Figcaption,
}

static FACTORY: Lazy<TagFactory> = Lazy::new(|| TagFactory {
    constructors: constructor_table(),
});

/// Lookup table from tag to its constructor, built once.
#[derive(Debug)]
pub struct TagFactory {
    constructors: IndexMap<Tag, Constructor>,
}

impl TagFactory {
    pub fn global() -> &'static TagFactory {
        &FACTORY
    }

    pub fn get(&self, tag: Tag) -> Option<Constructor> {
        self.constructors.get(&tag).copied()
    }

    /// Build a component bound to `tag`
    pub fn build(&self, tag: Tag, base: impl Into<BaseClass>, options: StyleOptions) -> StyledComponent {
        // the table holds every tag
        let constructor = self.constructors[&tag];
        constructor(base.into(), options)
    }

    /// Tags in table order
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.constructors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
