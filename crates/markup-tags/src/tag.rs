//! The closed domain of standard HTML element names.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string is not a known tag name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag name `{0}`")]
pub struct UnknownTagError(pub String);

macro_rules! tag_table {
    ( $( $name:literal => $variant:ident ),* $(,)? ) => {
        /// A standard HTML element name.
        ///
        /// The set of variants is closed and mirrors the embedded tag table
        /// exactly, in the same order. Use [`Tag::from_str`] to validate
        /// names arriving from untyped boundaries such as parsed markup.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Tag {
            $( #[doc = concat!("The `", $name, "` element.")] $variant, )*
        }

        impl Tag {
            /// Every known tag in canonical table order.
            pub const ALL: &'static [Tag] = &[ $( Tag::$variant, )* ];

            /// The element name as written in markup.
            pub const fn as_str(self) -> &'static str {
                match self { $( Tag::$variant => $name, )* }
            }
        }

        impl FromStr for Tag {
            type Err = UnknownTagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(Tag::$variant), )*
                    _ => Err(UnknownTagError(s.to_string())),
                }
            }
        }
    };
}

tag_table! {
    "a" => A,
    "abbr" => Abbr,
    "address" => Address,
    "area" => Area,
    "article" => Article,
    "aside" => Aside,
    "audio" => Audio,
    "b" => B,
    "base" => Base,
    "bdi" => Bdi,
    "bdo" => Bdo,
    "blockquote" => Blockquote,
    "body" => Body,
    "br" => Br,
    "button" => Button,
    "canvas" => Canvas,
    "caption" => Caption,
    "cite" => Cite,
    "code" => Code,
    "col" => Col,
    "colgroup" => Colgroup,
    "data" => Data,
    "datalist" => Datalist,
    "dd" => Dd,
    "del" => Del,
    "details" => Details,
    "dfn" => Dfn,
    "dialog" => Dialog,
    "div" => Div,
    "dl" => Dl,
    "dt" => Dt,
    "em" => Em,
    "embed" => Embed,
    "fieldset" => Fieldset,
    "figcaption" => Figcaption,
    "figure" => Figure,
    "footer" => Footer,
    "form" => Form,
    "h1" => H1,
    "h2" => H2,
    "h3" => H3,
    "h4" => H4,
    "h5" => H5,
    "h6" => H6,
    "head" => Head,
    "header" => Header,
    "hgroup" => Hgroup,
    "hr" => Hr,
    "html" => Html,
    "i" => I,
    "iframe" => Iframe,
    "img" => Img,
    "input" => Input,
    "ins" => Ins,
    "kbd" => Kbd,
    "label" => Label,
    "legend" => Legend,
    "li" => Li,
    "link" => Link,
    "main" => Main,
    "map" => Map,
    "mark" => Mark,
    "math" => Math,
    "menu" => Menu,
    "meta" => Meta,
    "meter" => Meter,
    "nav" => Nav,
    "noscript" => Noscript,
    "object" => Object,
    "ol" => Ol,
    "optgroup" => Optgroup,
    "option" => Option,
    "output" => Output,
    "p" => P,
    "param" => Param,
    "picture" => Picture,
    "pre" => Pre,
    "progress" => Progress,
    "q" => Q,
    "rb" => Rb,
    "rp" => Rp,
    "rt" => Rt,
    "rtc" => Rtc,
    "ruby" => Ruby,
    "s" => S,
    "samp" => Samp,
    "script" => Script,
    "section" => Section,
    "select" => Select,
    "slot" => Slot,
    "small" => Small,
    "source" => Source,
    "span" => Span,
    "strong" => Strong,
    "style" => Style,
    "sub" => Sub,
    "summary" => Summary,
    "sup" => Sup,
    "svg" => Svg,
    "table" => Table,
    "tbody" => Tbody,
    "td" => Td,
    "template" => Template,
    "textarea" => Textarea,
    "tfoot" => Tfoot,
    "th" => Th,
    "thead" => Thead,
    "time" => Time,
    "title" => Title,
    "tr" => Tr,
    "track" => Track,
    "u" => U,
    "ul" => Ul,
    "var" => Var,
    "video" => Video,
    "wbr" => Wbr,
}

impl Tag {
    /// Whether the element is void: it can never contain children and has
    /// no closing form.
    pub const fn is_void(self) -> bool {
        matches!(
            self,
            Tag::Area
                | Tag::Base
                | Tag::Br
                | Tag::Col
                | Tag::Embed
                | Tag::Hr
                | Tag::Img
                | Tag::Input
                | Tag::Link
                | Tag::Meta
                | Tag::Param
                | Tag::Source
                | Tag::Track
                | Tag::Wbr
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
