//! Variant-driven style resolution.
//!
//! [`resolve`] is the single entry point: it maps a control's semantic
//! inputs (variant, size, validation state, disabled) to a
//! [`StyleDescriptor`] of theme token names. The descriptor never carries
//! literal colors; the host theme provider owns the token values and the
//! host stylesheet applies them through the CSS custom properties emitted
//! by [`StyleDescriptor::css_custom_properties`].

use std::fmt::Write;

/// Name of a theme token, resolved by the host theme provider.
pub type Token = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic color/emphasis category of a control.
///
/// Variants affect color, background, and border treatment only; they
/// never change a control's semantics or dimensions.
pub enum Variant {
    /// Neutral action.
    Default,
    /// Primary emphasized action.
    Primary,
    /// Destructive action.
    Danger,
    /// Borderless, background-free action.
    Invisible,
    /// Outlined low-emphasis action.
    Outline,
}

impl Default for Variant {
    fn default() -> Self {
        Self::Default
    }
}

impl Variant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Danger => "danger",
            Self::Invisible => "invisible",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Control sizing tokens. Sizes affect dimensional tokens only.
pub enum Size {
    /// Dense control.
    Small,
    /// Default control.
    Medium,
    /// Spacious control.
    Large,
}

impl Default for Size {
    fn default() -> Self {
        Self::Medium
    }
}

impl Size {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whether a form control currently represents erroneous input.
///
/// Independent of [`Variant`]; drives `aria-invalid` and the validation
/// accent color.
pub enum ValidationState {
    /// No validation result.
    None,
    /// Input failed validation.
    Error,
    /// Input passed validation.
    Success,
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::None
    }
}

impl ValidationState {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Color tokens applied while an interaction state (hover, active) holds.
///
/// `None` fields inherit the base palette.
pub struct InteractionColors {
    /// Foreground token override.
    pub fg: Option<Token>,
    /// Background token override.
    pub bg: Option<Token>,
    /// Border token override.
    pub border: Option<Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fully resolved visual treatment for one control render.
///
/// Color fields name theme tokens; dimensional fields name the size scale
/// tokens. Interaction palettes are absent for disabled controls, which is
/// how affordance cues are suppressed end to end.
pub struct StyleDescriptor {
    /// Foreground (text and `currentColor` glyph) token.
    pub fg: Token,
    /// Background token.
    pub bg: Token,
    /// Border token.
    pub border: Token,
    /// Validation accent border token, when a validation state applies.
    pub accent: Option<Token>,
    /// Hover palette; `None` suppresses hover affordance entirely.
    pub hover: Option<InteractionColors>,
    /// Active/pressed palette; `None` suppresses the pressed affordance.
    pub active: Option<InteractionColors>,
    /// Control block-size token.
    pub height: Token,
    /// Inline padding token.
    pub padding_inline: Token,
    /// Font-size token.
    pub font_size: Token,
}

impl StyleDescriptor {
    /// Serializes the descriptor into the CSS custom properties consumed
    /// by the host stylesheet. Interaction palettes surface as
    /// `--ctl-hover-*`/`--ctl-active-*` so the external cascade can apply
    /// them under its own `:hover`/`:active` rules; when a palette is
    /// absent the properties are omitted and no affordance styling exists
    /// for the cascade to apply.
    pub fn css_custom_properties(&self) -> String {
        let mut css = String::new();
        push_token(&mut css, "ctl-fg", Some(self.fg));
        push_token(&mut css, "ctl-bg", Some(self.bg));
        push_token(&mut css, "ctl-border", Some(self.border));
        push_token(&mut css, "ctl-accent", self.accent);
        if let Some(hover) = self.hover {
            push_token(&mut css, "ctl-hover-fg", hover.fg);
            push_token(&mut css, "ctl-hover-bg", hover.bg);
            push_token(&mut css, "ctl-hover-border", hover.border);
        }
        if let Some(active) = self.active {
            push_token(&mut css, "ctl-active-fg", active.fg);
            push_token(&mut css, "ctl-active-bg", active.bg);
            push_token(&mut css, "ctl-active-border", active.border);
        }
        push_token(&mut css, "ctl-height", Some(self.height));
        push_token(&mut css, "ctl-padding-inline", Some(self.padding_inline));
        push_token(&mut css, "ctl-font-size", Some(self.font_size));
        css
    }
}

fn push_token(css: &mut String, property: &str, token: Option<Token>) {
    if let Some(token) = token {
        let _ = write!(css, "--{property}:var(--{token});");
    }
}

/// Resolves semantic inputs into a [`StyleDescriptor`].
///
/// Pure and referentially transparent: equal inputs always yield equal
/// descriptors. Disabled overrides the variant palette with the single
/// muted palette and suppresses the validation accent and all interaction
/// palettes; validation contributes only the accent border. Size
/// contributes only dimensional tokens.
pub fn resolve(
    variant: Variant,
    size: Size,
    validation: ValidationState,
    disabled: bool,
) -> StyleDescriptor {
    let (height, padding_inline, font_size) = dimensional_tokens(size);

    if disabled {
        return StyleDescriptor {
            fg: "fg-disabled",
            bg: "control-disabled-bg",
            border: "border-muted",
            accent: None,
            hover: None,
            active: None,
            height,
            padding_inline,
            font_size,
        };
    }

    let (fg, bg, border, hover, active) = variant_colors(variant);
    StyleDescriptor {
        fg,
        bg,
        border,
        accent: validation_accent(validation),
        hover: Some(hover),
        active: Some(active),
        height,
        padding_inline,
        font_size,
    }
}

fn variant_colors(
    variant: Variant,
) -> (Token, Token, Token, InteractionColors, InteractionColors) {
    match variant {
        Variant::Default => (
            "btn-text",
            "btn-bg",
            "btn-border",
            InteractionColors {
                fg: None,
                bg: Some("btn-hover-bg"),
                border: Some("btn-hover-border"),
            },
            InteractionColors {
                fg: None,
                bg: Some("btn-active-bg"),
                border: Some("btn-active-border"),
            },
        ),
        Variant::Primary => (
            "btn-primary-text",
            "btn-primary-bg",
            "btn-primary-border",
            InteractionColors {
                fg: None,
                bg: Some("btn-primary-hover-bg"),
                border: Some("btn-primary-hover-border"),
            },
            InteractionColors {
                fg: None,
                bg: Some("btn-primary-active-bg"),
                border: None,
            },
        ),
        Variant::Danger => (
            "btn-danger-text",
            "btn-bg",
            "btn-border",
            InteractionColors {
                fg: Some("btn-danger-hover-text"),
                bg: Some("btn-danger-hover-bg"),
                border: Some("btn-danger-hover-border"),
            },
            InteractionColors {
                fg: Some("btn-danger-hover-text"),
                bg: Some("btn-danger-active-bg"),
                border: None,
            },
        ),
        Variant::Invisible => (
            "accent-fg",
            "btn-invisible-bg",
            "btn-invisible-bg",
            InteractionColors {
                fg: None,
                bg: Some("btn-invisible-hover-bg"),
                border: None,
            },
            InteractionColors {
                fg: None,
                bg: Some("btn-invisible-active-bg"),
                border: None,
            },
        ),
        Variant::Outline => (
            "btn-outline-text",
            "btn-bg",
            "btn-border",
            InteractionColors {
                fg: Some("btn-outline-hover-text"),
                bg: Some("btn-outline-hover-bg"),
                border: Some("btn-outline-hover-border"),
            },
            InteractionColors {
                fg: Some("btn-outline-hover-text"),
                bg: Some("btn-outline-active-bg"),
                border: None,
            },
        ),
    }
}

fn validation_accent(validation: ValidationState) -> Option<Token> {
    match validation {
        ValidationState::None => None,
        ValidationState::Error => Some("danger-emphasis"),
        ValidationState::Success => Some("success-emphasis"),
    }
}

fn dimensional_tokens(size: Size) -> (Token, Token, Token) {
    match size {
        Size::Small => (
            "control-small-size",
            "control-small-padding-inline",
            "control-small-font-size",
        ),
        Size::Medium => (
            "control-medium-size",
            "control-medium-padding-inline",
            "control-medium-font-size",
        ),
        Size::Large => (
            "control-large-size",
            "control-large-padding-inline",
            "control-large-font-size",
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VARIANTS: [Variant; 5] = [
        Variant::Default,
        Variant::Primary,
        Variant::Danger,
        Variant::Invisible,
        Variant::Outline,
    ];
    const SIZES: [Size; 3] = [Size::Small, Size::Medium, Size::Large];
    const VALIDATIONS: [ValidationState; 3] = [
        ValidationState::None,
        ValidationState::Error,
        ValidationState::Success,
    ];

    #[test]
    fn disabled_palette_wins_for_every_combination() {
        for variant in VARIANTS {
            for size in SIZES {
                for validation in VALIDATIONS {
                    let resolved = resolve(variant, size, validation, true);
                    let muted = resolve(Variant::Default, size, ValidationState::None, true);
                    assert_eq!(resolved.fg, muted.fg);
                    assert_eq!(resolved.bg, muted.bg);
                    assert_eq!(resolved.border, muted.border);
                    assert_eq!(resolved.accent, None);
                    assert_eq!(resolved.hover, None);
                    assert_eq!(resolved.active, None);
                }
            }
        }
    }

    #[test]
    fn validation_accent_applies_only_while_enabled() {
        for variant in VARIANTS {
            let error = resolve(variant, Size::Medium, ValidationState::Error, false);
            assert_eq!(error.accent, Some("danger-emphasis"));
            let success = resolve(variant, Size::Medium, ValidationState::Success, false);
            assert_eq!(success.accent, Some("success-emphasis"));
            let none = resolve(variant, Size::Medium, ValidationState::None, false);
            assert_eq!(none.accent, None);
        }
    }

    #[test]
    fn size_changes_only_dimensional_tokens() {
        for variant in VARIANTS {
            for validation in VALIDATIONS {
                for disabled in [false, true] {
                    let small = resolve(variant, Size::Small, validation, disabled);
                    let medium = resolve(variant, Size::Medium, validation, disabled);
                    let large = resolve(variant, Size::Large, validation, disabled);
                    for pair in [(small, medium), (medium, large)] {
                        assert_eq!(pair.0.fg, pair.1.fg);
                        assert_eq!(pair.0.bg, pair.1.bg);
                        assert_eq!(pair.0.border, pair.1.border);
                        assert_eq!(pair.0.accent, pair.1.accent);
                        assert_eq!(pair.0.hover, pair.1.hover);
                        assert_eq!(pair.0.active, pair.1.active);
                        assert_ne!(pair.0.height, pair.1.height);
                        assert_ne!(pair.0.padding_inline, pair.1.padding_inline);
                    }
                }
            }
        }
    }

    #[test]
    fn variant_changes_only_color_tokens() {
        for size in SIZES {
            let baseline = resolve(Variant::Default, size, ValidationState::None, false);
            for variant in VARIANTS {
                let resolved = resolve(variant, size, ValidationState::None, false);
                assert_eq!(resolved.height, baseline.height);
                assert_eq!(resolved.padding_inline, baseline.padding_inline);
                assert_eq!(resolved.font_size, baseline.font_size);
            }
        }
    }

    #[test]
    fn resolution_is_referentially_transparent() {
        for variant in VARIANTS {
            for size in SIZES {
                for validation in VALIDATIONS {
                    for disabled in [false, true] {
                        assert_eq!(
                            resolve(variant, size, validation, disabled),
                            resolve(variant, size, validation, disabled),
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn custom_properties_omit_affordances_while_disabled() {
        let enabled = resolve(Variant::Primary, Size::Medium, ValidationState::None, false);
        assert!(enabled.css_custom_properties().contains("--ctl-hover-bg"));

        let disabled = resolve(Variant::Primary, Size::Medium, ValidationState::Error, true);
        let css = disabled.css_custom_properties();
        assert!(!css.contains("--ctl-hover-bg"));
        assert!(!css.contains("--ctl-active-bg"));
        assert!(!css.contains("--ctl-accent"));
        assert!(css.contains("--ctl-fg:var(--fg-disabled);"));
    }
}
