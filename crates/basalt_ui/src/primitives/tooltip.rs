use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compass direction a tooltip opens toward, relative to its anchor.
pub enum TooltipDirection {
    /// North.
    N,
    /// Northeast.
    Ne,
    /// East.
    E,
    /// Southeast.
    Se,
    /// South.
    S,
    /// Southwest.
    Sw,
    /// West.
    W,
    /// Northwest.
    Nw,
}

impl Default for TooltipDirection {
    fn default() -> Self {
        Self::S
    }
}

impl TooltipDirection {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }
}

/// Explicit text wins; otherwise the wrapped control's accessible label is
/// reused so icon-only controls get a hover description by default.
/// Whitespace-only values count as absent. `None` means no overlay at all.
pub(crate) fn resolve_tooltip_text(
    text: Option<String>,
    label: Option<String>,
) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
        .or_else(|| label.filter(|label| !label.trim().is_empty()))
}

#[component]
/// Optional descriptive overlay around an interactive control.
///
/// Purely additive: the wrapped control's own accessibility contract
/// (label, role, focus) is untouched, and when no text resolves the
/// control renders bare with no overlay node in the tree. Show/hide timing
/// belongs to the host overlay layer, keyed off hover/focus on the anchor.
pub fn Tooltip(
    /// Overlay text; falls back to `label` when omitted.
    #[prop(optional, into)]
    text: Option<String>,
    /// Accessible label of the wrapped control, reused as fallback text.
    #[prop(optional, into)]
    label: Option<String>,
    /// Direction the overlay opens toward.
    #[prop(default = TooltipDirection::S)]
    direction: TooltipDirection,
    /// Layout-only class hook for caller-side placement.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// The wrapped control.
    children: Children,
) -> impl IntoView {
    match resolve_tooltip_text(text, label) {
        Some(text) => view! {
            <span
                class=merge_layout_class("ui-tooltip-anchor", layout_class)
                data-ui-primitive="true"
                data-ui-kind="tooltip-anchor"
            >
                {children()}
                <span
                    class="ui-tooltip"
                    role="tooltip"
                    data-ui-primitive="true"
                    data-ui-kind="tooltip"
                    data-ui-direction=direction.token()
                >
                    {text}
                </span>
            </span>
        }
        .into_view(),
        None => children().into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn explicit_text_wins_over_label() {
        assert_eq!(
            resolve_tooltip_text(
                Some("You have no unread notifications".to_string()),
                Some("Notifications".to_string()),
            ),
            Some("You have no unread notifications".to_string()),
        );
    }

    #[test]
    fn omitted_text_falls_back_to_accessible_label() {
        assert_eq!(
            resolve_tooltip_text(None, Some("Notifications".to_string())),
            Some("Notifications".to_string()),
        );
        assert_eq!(
            resolve_tooltip_text(Some("   ".to_string()), Some("Notifications".to_string())),
            Some("Notifications".to_string()),
        );
    }

    #[test]
    fn no_text_means_no_overlay() {
        assert_eq!(resolve_tooltip_text(None, None), None);
        assert_eq!(resolve_tooltip_text(Some(String::new()), None), None);
    }

    #[test]
    fn direction_tokens_cover_all_compass_points() {
        let directions = [
            (TooltipDirection::N, "n"),
            (TooltipDirection::Ne, "ne"),
            (TooltipDirection::E, "e"),
            (TooltipDirection::Se, "se"),
            (TooltipDirection::S, "s"),
            (TooltipDirection::Sw, "sw"),
            (TooltipDirection::W, "w"),
            (TooltipDirection::Nw, "nw"),
        ];
        for (direction, token) in directions {
            assert_eq!(direction.token(), token);
        }
    }
}
