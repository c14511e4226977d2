use super::tooltip::resolve_tooltip_text;
use super::*;

/// Overlay text for an icon-only control. `None` means the control
/// renders bare, with no tooltip node in the tree at all, either because
/// the caller suppressed the wrapper or because no text resolves.
pub(crate) fn icon_button_overlay(
    disable_tooltip: bool,
    text: Option<String>,
    label: &str,
) -> Option<String> {
    if disable_tooltip {
        return None;
    }
    resolve_tooltip_text(text, Some(label.to_owned()))
}

/// Control-level activation gate. Disabling is enforced here rather than
/// delegated to callers guarding their own callbacks; a disabled control
/// swallows the event even when the native `disabled` attribute is
/// bypassed by synthetic dispatch.
pub(crate) fn fire_activation<T>(disabled: bool, on_activate: Option<&Callback<T>>, ev: T) {
    if disabled {
        return;
    }
    if let Some(on_activate) = on_activate {
        on_activate.call(ev);
    }
}

#[component]
/// Clickable control composing, in fixed left-to-right order: optional
/// leading icon, label content (which may include a [`ButtonCounter`]),
/// optional trailing icon.
///
/// The control is stateless: `disabled` is fully caller-driven and, while
/// set, suppresses `on_activate` along with every hover/active affordance
/// in the resolved style. Unknown attributes land in `attrs` and are
/// forwarded unexamined to the underlying `<button>`.
pub fn Button(
    /// Color/emphasis treatment.
    #[prop(default = Variant::Default)]
    variant: Variant,
    /// Dimensional scale.
    #[prop(default = Size::Medium)]
    size: Size,
    /// Layout-only class hook for caller-side placement.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Element id.
    #[prop(optional, into)]
    id: Option<String>,
    /// Accessible label when the visible content is not descriptive.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Whether the control is inactive.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Glyph rendered before the label.
    #[prop(optional)]
    leading_icon: Option<IconName>,
    /// Glyph rendered after the label.
    #[prop(optional)]
    trailing_icon: Option<IconName>,
    /// Invoked on activation while enabled.
    #[prop(optional)]
    on_activate: Option<Callback<MouseEvent>>,
    /// Opaque pass-through attributes forwarded to the `<button>`.
    #[prop(attrs)]
    attrs: Vec<(&'static str, Attribute)>,
    /// Label content.
    children: Children,
) -> impl IntoView {
    provide_context(AmbientControlState {
        disabled: Signal::derive(move || disabled.get()),
    });

    view! {
        <button
            {..attrs}
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=aria_label
            style=move || {
                resolve(variant, size, ValidationState::None, disabled.get())
                    .css_custom_properties()
            }
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| fire_activation(disabled.get_untracked(), on_activate.as_ref(), ev)
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Presentational count bubble embedded in a [`Button`] label.
///
/// Never a focus target and never interactive on its own. The muted
/// disabled treatment is inherited from the owning control through
/// [`AmbientControlState`], not passed in by the caller.
pub fn ButtonCounter(
    /// Count content, owned by the caller.
    children: Children,
) -> impl IntoView {
    let ambient = use_context::<AmbientControlState>();
    let disabled = Signal::derive(move || {
        ambient.map(|state| state.disabled.get()).unwrap_or(false)
    });

    view! {
        <span
            class="ui-counter"
            data-ui-primitive="true"
            data-ui-kind="counter"
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {children()}
        </span>
    }
}

#[component]
/// Icon-only [`Button`] specialization.
///
/// With no visible text, the accessible label is a required prop; an empty
/// label is a contract violation reported during development. Unless
/// `disable_tooltip` is set, the control wraps itself in a [`Tooltip`]
/// that falls back to the accessible label, so every icon-only control has
/// a hover description by default.
pub fn IconButton(
    /// Glyph to render.
    icon: IconName,
    /// Accessible label announced by assistive technology.
    #[prop(into)]
    aria_label: String,
    /// Color/emphasis treatment.
    #[prop(default = Variant::Default)]
    variant: Variant,
    /// Dimensional scale.
    #[prop(default = Size::Medium)]
    size: Size,
    /// Layout-only class hook for caller-side placement.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Whether the control is inactive.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Tooltip text override; defaults to the accessible label.
    #[prop(optional, into)]
    tooltip_text: Option<String>,
    /// Compass direction the tooltip opens toward.
    #[prop(default = TooltipDirection::S)]
    tooltip_direction: TooltipDirection,
    /// Removes the tooltip wrapper entirely instead of hiding it.
    #[prop(optional)]
    disable_tooltip: bool,
    /// Invoked on activation while enabled.
    #[prop(optional)]
    on_activate: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    debug_assert!(
        !aria_label.trim().is_empty(),
        "icon-only controls require an accessible label"
    );
    if aria_label.trim().is_empty() {
        logging::warn!("IconButton rendered without an accessible label");
    }

    let overlay = icon_button_overlay(disable_tooltip, tooltip_text, &aria_label);
    let button = view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=aria_label
            style=move || {
                resolve(variant, size, ValidationState::None, disabled.get())
                    .css_custom_properties()
            }
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| fire_activation(disabled.get_untracked(), on_activate.as_ref(), ev)
        >
            <Icon icon size=IconSize::Md />
        </button>
    };

    match overlay {
        Some(text) => view! {
            <Tooltip text=text direction=tooltip_direction>
                {button}
            </Tooltip>
        }
        .into_view(),
        None => button.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn counting_callback(count: &Rc<Cell<u32>>) -> Callback<()> {
        let count = Rc::clone(count);
        Callback::new(move |_| count.set(count.get() + 1))
    }

    #[test]
    fn disabled_control_never_fires_activation() {
        let runtime = create_runtime();
        let count = Rc::new(Cell::new(0));
        let on_activate = counting_callback(&count);

        for _ in 0..3 {
            fire_activation(true, Some(&on_activate), ());
        }
        assert_eq!(count.get(), 0);

        // The same disabled control resolves the muted palette, not the
        // variant palette it was declared with.
        let descriptor = resolve(Variant::Primary, Size::Medium, ValidationState::None, true);
        let muted = resolve(Variant::Default, Size::Medium, ValidationState::None, true);
        assert_eq!(descriptor.fg, muted.fg);
        assert_eq!(descriptor.bg, muted.bg);
        assert_ne!(
            descriptor.bg,
            resolve(Variant::Primary, Size::Medium, ValidationState::None, false).bg
        );

        runtime.dispose();
    }

    #[test]
    fn enabled_control_fires_once_per_activation() {
        let runtime = create_runtime();
        let count = Rc::new(Cell::new(0));
        let on_activate = counting_callback(&count);

        fire_activation(false, Some(&on_activate), ());
        fire_activation(false, Some(&on_activate), ());
        assert_eq!(count.get(), 2);

        runtime.dispose();
    }

    #[test]
    fn missing_callback_is_a_no_op() {
        fire_activation::<()>(false, None, ());
        fire_activation::<()>(true, None, ());
    }

    #[test]
    fn suppressed_tooltip_leaves_no_overlay_at_all() {
        assert_eq!(
            icon_button_overlay(true, Some("Close the dialog".to_string()), "Close"),
            None,
        );
        assert_eq!(icon_button_overlay(true, None, "Close"), None);
    }

    #[test]
    fn icon_button_overlay_falls_back_to_the_accessible_label() {
        assert_eq!(
            icon_button_overlay(false, None, "Close"),
            Some("Close".to_string()),
        );
        assert_eq!(
            icon_button_overlay(false, Some("Close the dialog".to_string()), "Close"),
            Some("Close the dialog".to_string()),
        );
    }
}
