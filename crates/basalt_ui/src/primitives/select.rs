use super::*;

/// `aria-invalid` is derived strictly from the validation state so ARIA
/// can never drift from the visual treatment; callers cannot set it.
pub(crate) fn aria_invalid_token(validation: ValidationState) -> &'static str {
    match validation {
        ValidationState::Error => "true",
        ValidationState::None | ValidationState::Success => "false",
    }
}

/// Fill applied to the arrow indicator under forced-colors display modes,
/// distinct for disabled vs. enabled controls.
pub(crate) fn indicator_forced_fill(disabled: bool) -> &'static str {
    if disabled {
        "GrayText"
    } else {
        "FieldText"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Synthesized first entry standing in for an unselected value.
pub(crate) struct PlaceholderEntry {
    pub(crate) label: String,
    /// Non-selectable when the field requires a real choice.
    pub(crate) disabled: bool,
    /// Hidden from the open list when the field requires a real choice.
    pub(crate) hidden: bool,
    /// Pre-selected so the closed control shows the placeholder text.
    pub(crate) selected: bool,
}

/// Inline style carried by the arrow indicator. The glyph is a decorative
/// overlay, so pointer events are disabled unconditionally no matter how
/// the host positions it; the forced-colors fill rides along as a custom
/// property the CSS layer applies inside its forced-colors block.
pub(crate) fn indicator_style(disabled: bool) -> String {
    format!(
        "pointer-events:none;--indicator-forced-fill:{};",
        indicator_forced_fill(disabled)
    )
}

/// Applies the optional controlled-value binding. The binding must be an
/// element property; a `value` attribute has no effect on a `<select>`.
/// Applied after the entries exist so the initial selection can match one.
fn bind_selection(
    select: HtmlElement<html::Select>,
    value: Option<MaybeSignal<String>>,
) -> HtmlElement<html::Select> {
    match value {
        Some(value) => select.prop("value", move || value.get()),
        None => select,
    }
}

/// Synthesizes the placeholder entry, if any. A required field makes the
/// entry non-selectable and hides it from the open list, forcing the user
/// toward a real value; otherwise it renders as a disabled-looking but
/// visible first entry.
pub(crate) fn placeholder_entry(
    placeholder: Option<String>,
    required: bool,
) -> Option<PlaceholderEntry> {
    placeholder.map(|label| PlaceholderEntry {
        label,
        disabled: required,
        hidden: required,
        selected: true,
    })
}

#[component]
/// Visual frame around a wrapped form control.
///
/// Consumes the style resolver with exactly the inputs the inner element
/// derives its attribute state from, so the frame's disabled/validation
/// treatment cannot diverge from the wrapped element.
fn FieldFrame(
    size: Size,
    validation_state: ValidationState,
    #[prop(into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-field-frame", layout_class)
            style=move || {
                resolve(Variant::Default, size, validation_state, disabled.get())
                    .css_custom_properties()
            }
            data-ui-primitive="true"
            data-ui-kind="field-frame"
            data-ui-size=size.token()
            data-ui-validation=validation_state.token()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {children()}
        </span>
    }
}

#[component]
/// Accessible wrapper around a native `<select>`.
///
/// Entries are declared with [`SelectOption`] and [`SelectOptGroup`].
/// Disabled and validation state flow one way from the props into both the
/// frame styling and the element attributes, `aria-invalid` included.
/// Unknown attributes land in `attrs` and are forwarded unexamined to the
/// inner `<select>`. A decorative arrow indicator overlays the control; it
/// never intercepts pointer or keyboard input.
pub fn Select(
    /// Dimensional scale.
    #[prop(default = Size::Medium)]
    size: Size,
    /// Current validation result.
    #[prop(default = ValidationState::None)]
    validation_state: ValidationState,
    /// Whether the control is inactive.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Synthesized zero-value first entry, pre-selected by default.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Whether a real (non-placeholder) choice is mandatory.
    #[prop(optional)]
    required: bool,
    /// Layout-only class hook for caller-side placement.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Element id.
    #[prop(optional, into)]
    id: Option<String>,
    /// Accessible label for the field.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Reactive value binding. While present the selection tracks the
    /// bound signal; when omitted the element keeps its own selection
    /// state.
    #[prop(optional, into)]
    value: Option<MaybeSignal<String>>,
    /// Invoked when the selection changes.
    #[prop(optional)]
    on_change: Option<Callback<web_sys::Event>>,
    /// Opaque pass-through attributes forwarded to the `<select>`.
    #[prop(attrs)]
    attrs: Vec<(&'static str, Attribute)>,
    /// Option entries.
    children: Children,
) -> impl IntoView {
    let entry = placeholder_entry(placeholder, required);
    let has_placeholder = entry.is_some();

    let select_el = view! {
        <select
            {..attrs}
            class="ui-select"
            id=id
            aria-label=aria_label
            required=required
            disabled=move || disabled.get()
            aria-invalid=aria_invalid_token(validation_state)
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-size=size.token()
            data-ui-validation=validation_state.token()
            data-ui-hasplaceholder=bool_token(has_placeholder)
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        >
            {entry.map(|entry| view! {
                <option
                    value=""
                    disabled=entry.disabled
                    selected=entry.selected
                    hidden=entry.hidden
                >
                    {entry.label}
                </option>
            })}
            {children()}
        </select>
    };
    let select_el = bind_selection(select_el, value);

    view! {
        <FieldFrame
            size=size
            validation_state=validation_state
            disabled=disabled
            layout_class=layout_class.unwrap_or("")
        >
            {select_el}
            <span
                class="ui-select-indicator"
                aria-hidden="true"
                data-ui-primitive="true"
                data-ui-slot="indicator"
                data-ui-disabled=move || bool_token(disabled.get())
                style=move || indicator_style(disabled.get())
            >
                <Icon icon=IconName::SelectIndicator size=IconSize::Md />
            </span>
        </FieldFrame>
    }
}

#[component]
/// Declarative entry inside a [`Select`]. Pure pass-through to a native
/// `<option>`; it has no logic of its own.
pub fn SelectOption(
    /// Submitted value for this entry.
    #[prop(into)]
    value: String,
    /// Whether the entry is selectable.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Whether the entry is selected initially.
    #[prop(optional)]
    selected: bool,
    /// Visible entry label.
    children: Children,
) -> impl IntoView {
    view! {
        <option value=value disabled=move || disabled.get() selected=selected>
            {children()}
        </option>
    }
}

#[component]
/// Declarative entry group inside a [`Select`]. Pure pass-through to a
/// native `<optgroup>`.
pub fn SelectOptGroup(
    /// Group label shown in the open list.
    #[prop(into)]
    label: String,
    /// Entries in the group.
    children: Children,
) -> impl IntoView {
    view! { <optgroup label=label>{children()}</optgroup> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn aria_invalid_tracks_error_exactly() {
        assert_eq!(aria_invalid_token(ValidationState::Error), "true");
        assert_eq!(aria_invalid_token(ValidationState::Success), "false");
        assert_eq!(aria_invalid_token(ValidationState::None), "false");
    }

    #[test]
    fn required_placeholder_is_non_selectable_and_hidden() {
        let entry = placeholder_entry(Some("Choose one".to_string()), true)
            .expect("placeholder entry");
        assert!(entry.disabled);
        assert!(entry.hidden);
        assert!(entry.selected);
        assert_eq!(entry.label, "Choose one");
    }

    #[test]
    fn optional_placeholder_stays_visible_and_selected() {
        let entry = placeholder_entry(Some("Choose one".to_string()), false)
            .expect("placeholder entry");
        assert!(!entry.disabled);
        assert!(!entry.hidden);
        assert!(entry.selected);
    }

    #[test]
    fn no_placeholder_synthesizes_nothing() {
        assert_eq!(placeholder_entry(None, true), None);
        assert_eq!(placeholder_entry(None, false), None);
    }

    #[test]
    fn indicator_recolors_for_forced_colors_by_disabled_state() {
        assert_eq!(indicator_forced_fill(true), "GrayText");
        assert_eq!(indicator_forced_fill(false), "FieldText");
    }

    #[test]
    fn indicator_never_intercepts_pointer_events() {
        for disabled in [true, false] {
            assert!(indicator_style(disabled).contains("pointer-events:none;"));
        }
        assert_eq!(
            indicator_style(true),
            "pointer-events:none;--indicator-forced-fill:GrayText;"
        );
    }

    #[test]
    fn value_binding_attaches_only_when_given() {
        let runtime = create_runtime();
        let flavor = create_rw_signal("sparkling".to_string());

        let _bound = bind_selection(html::select(), Some(flavor.into()));
        let _unbound = bind_selection(html::select(), None);

        runtime.dispose();
    }

    #[test]
    fn caller_can_bind_the_selection() {
        let runtime = create_runtime();
        let flavor = create_rw_signal("sparkling".to_string());

        let _view = view! {
            <Select aria_label="Flavor" value=flavor>
                <SelectOption value="plain">"Plain"</SelectOption>
                <SelectOption value="sparkling">"Sparkling"</SelectOption>
            </Select>
        };

        runtime.dispose();
    }
}
