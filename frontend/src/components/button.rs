use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-full font-semibold transition-all focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed";

fn variant_classes(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "bg-black text-white hover:bg-gray-800 focus:ring-gray-500",
        ButtonVariant::Secondary => "bg-gray-200 text-black hover:bg-gray-300 focus:ring-gray-400",
        ButtonVariant::Outline => "border-2 border-black text-black hover:bg-gray-100 focus:ring-gray-500",
        ButtonVariant::Ghost => "text-black hover:bg-gray-100 focus:ring-gray-300",
    }
}

fn size_classes(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Sm => "px-4 py-1.5 text-sm",
        ButtonSize::Md => "px-6 py-2 text-base",
        ButtonSize::Lg => "px-8 py-3 text-lg",
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!(BUTTON_BASE, variant_classes(props.variant), size_classes(props.size), props.class.clone())}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.children.clone() }
        </button>
    }
}
