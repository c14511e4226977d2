//! Control, form-field, and overlay primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::icon::{Icon, IconName, IconSize};
use crate::style::{resolve, Size, ValidationState, Variant};

mod button;
mod select;
mod tooltip;

pub use button::{Button, ButtonCounter, IconButton};
pub use select::{Select, SelectOptGroup, SelectOption};
pub use tooltip::{Tooltip, TooltipDirection};

#[derive(Clone, Copy)]
/// Immutable visual state a compound control provides to its composed
/// children, so presentational sub-elements follow the parent without
/// being handed `disabled` explicitly on every use.
pub struct AmbientControlState {
    /// Whether the owning control is disabled.
    pub disabled: Signal<bool>,
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
