//! Component catalog for the `basalt_ui` control families.
//!
//! Renders every control family with its full prop surface so visual
//! refinements can be reviewed in one place. All state here (the watch
//! counter, the eye toggle, the selected flavor) is owned by the catalog
//! and passed down as props; the controls themselves hold none.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use basalt_ui::prelude::*;
use leptos::*;

#[component]
fn CatalogSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="catalog-section">
            <h2>{title}</h2>
            <div class="catalog-row">{children()}</div>
        </section>
    }
}

#[component]
/// Full catalog page.
pub fn CatalogApp() -> impl IntoView {
    let count = create_rw_signal(0u32);
    let disabled_count = create_rw_signal(0u32);
    let watching = create_rw_signal(false);
    let flavor = create_rw_signal("plain".to_string());

    view! {
        <main class="catalog-root">
            <h1>"Basalt UI catalog"</h1>

            <CatalogSection title="Button variants">
                <Button>"Default"</Button>
                <Button variant=Variant::Primary>"Primary"</Button>
                <Button variant=Variant::Danger>"Danger"</Button>
                <Button variant=Variant::Invisible>"Invisible"</Button>
                <Button variant=Variant::Outline>"Outline"</Button>
            </CatalogSection>

            <CatalogSection title="Sizes">
                <Button size=Size::Small>"Small"</Button>
                <Button size=Size::Medium>"Medium"</Button>
                <Button size=Size::Large>"Large"</Button>
            </CatalogSection>

            <CatalogSection title="Icons">
                <Button leading_icon=IconName::Search>"Before"</Button>
                <Button trailing_icon=IconName::TriangleDown>"Dropdown"</Button>
                {move || {
                    let icon = if watching.get() { IconName::EyeClosed } else { IconName::Eye };
                    view! {
                        <Button
                            trailing_icon=icon
                            on_activate=Callback::new(move |_| {
                                watching.update(|value| *value = !*value)
                            })
                        >
                            "Watch"
                        </Button>
                    }
                }}
            </CatalogSection>

            <CatalogSection title="Glyph scale">
                <Icon icon=IconName::Bell size=IconSize::Sm />
                <Icon icon=IconName::Bell />
                <Icon icon=IconName::Bell size=IconSize::Lg />
            </CatalogSection>

            <CatalogSection title="Watch counter">
                <Button on_activate=Callback::new(move |_| count.update(|value| *value += 1))>
                    "Watch"
                    <ButtonCounter>{move || count.get()}</ButtonCounter>
                </Button>
                <Button
                    variant=Variant::Primary
                    on_activate=Callback::new(move |_| count.update(|value| *value += 1))
                >
                    "Watch"
                    <ButtonCounter>{move || count.get()}</ButtonCounter>
                </Button>
                <Button
                    variant=Variant::Invisible
                    on_activate=Callback::new(move |_| count.update(|value| *value += 1))
                >
                    "Watch"
                    <ButtonCounter>{move || count.get()}</ButtonCounter>
                </Button>
                <Button
                    variant=Variant::Danger
                    on_activate=Callback::new(move |_| count.update(|value| *value += 1))
                >
                    "Watch"
                    <ButtonCounter>{move || count.get()}</ButtonCounter>
                </Button>
                <Button
                    variant=Variant::Outline
                    on_activate=Callback::new(move |_| count.update(|value| *value += 1))
                >
                    "Watch"
                    <ButtonCounter>{move || count.get()}</ButtonCounter>
                </Button>
            </CatalogSection>

            <CatalogSection title="Icon buttons">
                <IconButton icon=IconName::Dismiss aria_label="Close" />
                <IconButton icon=IconName::Dismiss aria_label="Close" variant=Variant::Invisible />
                <IconButton icon=IconName::Dismiss aria_label="Close" variant=Variant::Danger />
                <IconButton icon=IconName::Dismiss aria_label="Close" variant=Variant::Primary />
                <IconButton icon=IconName::Dismiss aria_label="Close" variant=Variant::Outline />
            </CatalogSection>

            <CatalogSection title="Icon button tooltips">
                <IconButton icon=IconName::Bell aria_label="Notifications" />
                <IconButton
                    icon=IconName::Bell
                    aria_label="Notifications"
                    tooltip_text="You have no unread notifications"
                />
                <IconButton
                    icon=IconName::Bell
                    aria_label="Notifications"
                    tooltip_direction=TooltipDirection::E
                />
                <IconButton icon=IconName::Bell aria_label="Notifications" disable_tooltip=true />
            </CatalogSection>

            <CatalogSection title="Disabled">
                // The counter stays at zero no matter how often this is
                // activated; the gate lives in the control, not here.
                <Button
                    disabled=true
                    on_activate=Callback::new(move |_| disabled_count.update(|value| *value += 1))
                >
                    "Watch"
                    <ButtonCounter>{move || disabled_count.get()}</ButtonCounter>
                </Button>
                <Button disabled=true>"Disabled"</Button>
                <Button disabled=true variant=Variant::Primary>"Disabled"</Button>
                <Button disabled=true variant=Variant::Danger>"Disabled"</Button>
                <Button disabled=true variant=Variant::Invisible>"Disabled"</Button>
                <Button disabled=true variant=Variant::Outline>"Disabled"</Button>
                <IconButton icon=IconName::Dismiss aria_label="Close" disabled=true />
            </CatalogSection>

            <CatalogSection title="Selects">
                <Select
                    aria_label="Flavor"
                    value=flavor
                    on_change=Callback::new(move |ev| flavor.set(event_target_value(&ev)))
                >
                    <SelectOption value="plain">"Plain"</SelectOption>
                    <SelectOption value="sparkling">"Sparkling"</SelectOption>
                    <SelectOptGroup label="Seasonal">
                        <SelectOption value="cranberry">"Cranberry"</SelectOption>
                        <SelectOption value="elderflower" disabled=true>"Elderflower"</SelectOption>
                    </SelectOptGroup>
                </Select>
                <Select aria_label="Flavor" placeholder="Choose a flavor">
                    <SelectOption value="plain">"Plain"</SelectOption>
                    <SelectOption value="sparkling">"Sparkling"</SelectOption>
                </Select>
                <Select aria_label="Flavor" placeholder="Choose a flavor" required=true>
                    <SelectOption value="plain">"Plain"</SelectOption>
                    <SelectOption value="sparkling">"Sparkling"</SelectOption>
                </Select>
                <p class="catalog-note">{move || format!("Selected: {}", flavor.get())}</p>
            </CatalogSection>

            <CatalogSection title="Select states">
                <Select aria_label="Flavor" validation_state=ValidationState::Error>
                    <SelectOption value="plain">"Plain"</SelectOption>
                </Select>
                <Select aria_label="Flavor" validation_state=ValidationState::Success>
                    <SelectOption value="plain">"Plain"</SelectOption>
                </Select>
                <Select aria_label="Flavor" disabled=true>
                    <SelectOption value="plain">"Plain"</SelectOption>
                </Select>
                <Select aria_label="Flavor" size=Size::Small>
                    <SelectOption value="plain">"Plain"</SelectOption>
                </Select>
                <Select aria_label="Flavor" size=Size::Large>
                    <SelectOption value="plain">"Plain"</SelectOption>
                </Select>
            </CatalogSection>
        </main>
    }
}

/// Mounts the catalog to the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <CatalogApp /> })
}
