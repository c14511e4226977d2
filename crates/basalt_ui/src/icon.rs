//! Centralized icon glyph API.
//!
//! Glyphs are opaque 16x16 renderables drawn with `fill="currentColor"`,
//! so their color always tracks the surrounding text color, including the
//! muted foreground of disabled controls. Components only decide glyph
//! position (leading/trailing) and size.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named glyphs available to the control families.
pub enum IconName {
    /// Notification bell.
    Bell,
    /// Dismiss/close cross.
    Dismiss,
    /// Open eye (watching).
    Eye,
    /// Closed eye (not watching).
    EyeClosed,
    /// Magnifying glass.
    Search,
    /// Downward caret for dropdown triggers.
    TriangleDown,
    /// Paired up/down arrows overlaid on select fields.
    SelectIndicator,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Bell => "bell",
            Self::Dismiss => "dismiss",
            Self::Eye => "eye",
            Self::EyeClosed => "eye-closed",
            Self::Search => "search",
            Self::TriangleDown => "triangle-down",
            Self::SelectIndicator => "select-indicator",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Bell => {
                "M8 16a2 2 0 0 0 1.985-1.75c.017-.137-.097-.25-.235-.25h-3.5c-.138 0-.252.113-.235.25A2 2 0 0 0 8 16ZM3 5a5 5 0 0 1 10 0v2.947c0 .05.015.098.042.139l1.703 2.555A1.519 1.519 0 0 1 13.482 13H2.518a1.516 1.516 0 0 1-1.263-2.36l1.703-2.554A.255.255 0 0 0 3 7.947Z"
            }
            Self::Dismiss => {
                "M3.72 3.72a.75.75 0 0 1 1.06 0L8 6.94l3.22-3.22a.75.75 0 1 1 1.06 1.06L9.06 8l3.22 3.22a.75.75 0 1 1-1.06 1.06L8 9.06l-3.22 3.22a.75.75 0 0 1-1.06-1.06L6.94 8 3.72 4.78a.75.75 0 0 1 0-1.06Z"
            }
            Self::Eye => {
                "M8 2c1.981 0 3.671.992 4.933 2.078 1.27 1.091 2.187 2.345 2.637 3.023a1.62 1.62 0 0 1 0 1.798c-.45.678-1.367 1.932-2.637 3.023C11.67 13.008 9.981 14 8 14c-1.981 0-3.671-.992-4.933-2.078C1.797 10.83.88 9.576.43 8.898a1.62 1.62 0 0 1 0-1.798c.45-.677 1.367-1.931 2.637-3.022C4.33 2.992 6.019 2 8 2ZM8 5.5A2.5 2.5 0 1 0 8 10.5 2.5 2.5 0 0 0 8 5.5Z"
            }
            Self::EyeClosed => {
                "M.143 2.31a.75.75 0 0 1 1.047-.167l14.5 10.5a.75.75 0 1 1-.88 1.214l-2.248-1.628C11.346 13.19 9.792 14 8 14c-1.981 0-3.671-.992-4.933-2.078C1.797 10.83.88 9.576.43 8.898a1.62 1.62 0 0 1 0-1.798c.452-.68 1.373-1.94 2.649-3.034L.31 3.357a.75.75 0 0 1-.167-1.047ZM8 2c1.981 0 3.671.992 4.933 2.078 1.27 1.091 2.187 2.345 2.637 3.023a1.62 1.62 0 0 1 .001 1.798c-.175.263-.412.6-.708.972l-1.21-.876c.307-.373.553-.713.726-.972a.12.12 0 0 0 0-.148c-.417-.628-1.25-1.76-2.383-2.735C10.86 4.16 9.485 3.5 8 3.5c-.442 0-.873.059-1.289.165L5.42 2.73A6.826 6.826 0 0 1 8 2Z"
            }
            Self::Search => {
                "M10.68 11.74a6 6 0 1 1 1.06-1.06l3.04 3.04a.749.749 0 0 1-.326 1.275.749.749 0 0 1-.734-.215ZM11.5 7a4.499 4.499 0 1 0-8.997 0A4.499 4.499 0 0 0 11.5 7Z"
            }
            Self::TriangleDown => {
                "m4.427 7.427 3.396 3.396a.25.25 0 0 0 .354 0l3.396-3.396A.25.25 0 0 0 11.396 7H4.604a.25.25 0 0 0-.177.427Z"
            }
            Self::SelectIndicator => {
                "m4.074 9.427 3.396 3.396a.25.25 0 0 0 .354 0l3.396-3.396A.25.25 0 0 0 11.043 9H4.251a.25.25 0 0 0-.177.427ZM4.074 7.47 7.47 4.073a.25.25 0 0 1 .354 0L11.22 7.47a.25.25 0 0 1-.177.426H4.251a.25.25 0 0 1-.177-.426Z"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Glyph sizing tokens.
pub enum IconSize {
    /// Inline glyph inside text-bearing controls.
    Sm,
    /// Default glyph.
    Md,
    /// Prominent glyph.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    fn px(self) -> &'static str {
        match self {
            Self::Sm => "12",
            Self::Md => "16",
            Self::Lg => "24",
        }
    }
}

#[component]
/// Shared icon glyph primitive.
pub fn Icon(
    /// Glyph to draw.
    icon: IconName,
    /// Rendered size.
    #[prop(default = IconSize::Md)]
    size: IconSize,
) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 16 16"
            width=size.px()
            height=size.px()
            fill="currentColor"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn glyph_sizes_map_to_the_pixel_grid() {
        assert_eq!(IconSize::Sm.px(), "12");
        assert_eq!(IconSize::Md.px(), "16");
        assert_eq!(IconSize::Lg.px(), "24");
    }
}
