//! Accessible design-system primitives: the button family, the select
//! field family, and the tooltip binding.
//!
//! Every control is a stateless Leptos component: semantic props (variant,
//! size, validation state, disabled) resolve through [`resolve`] into a
//! descriptor of theme token names, and the same props derive the ARIA
//! attribute state, so visual and assistive treatment can never diverge.
//! The host owns token values, the CSS cascade, and overlay timing; this
//! crate speaks to them through token names, CSS custom properties, and
//! the stable `data-ui-*` DOM contract.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod style;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AmbientControlState, Button, ButtonCounter, IconButton, Select, SelectOptGroup, SelectOption,
    Tooltip, TooltipDirection,
};
pub use style::{resolve, InteractionColors, Size, StyleDescriptor, Token, ValidationState, Variant};

/// Convenience imports for crates composing the control families.
pub mod prelude {
    pub use crate::{
        AmbientControlState, Button, ButtonCounter, Icon, IconButton, IconName, IconSize, Select,
        SelectOptGroup, SelectOption, Size, Tooltip, TooltipDirection, ValidationState, Variant,
    };
}
