//! Axis enumerations and their legal value sets

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A value that can be offered in a selection prompt
pub trait CatalogOption: Copy + Eq + 'static {
    /// Axis name used in prompts and error messages
    const AXIS: &'static str;

    /// Stable identifier (used in preset files and `--preset` lookups)
    fn id(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;

    /// Short description shown next to the label
    fn hint(&self) -> &'static str;
}

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $axis:literal {
            $( $variant:ident => ($id:literal, $label:literal, $hint:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl $name {
            /// Every value of this axis, in prompt order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl CatalogOption for $name {
            const AXIS: &'static str = $axis;

            fn id(&self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn hint(&self) -> &'static str {
                match self {
                    $($name::$variant => $hint,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.id().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ConfigError::UnknownValue {
                        axis: $axis,
                        value: s.to_string(),
                    })
            }
        }
    };
}

catalog_enum! {
    /// UI framework of the generated project
    Framework, "framework" {
        React => ("react", "React", "JSX components with react-router"),
        Vue3 => ("vue3", "Vue 3", "Single-file components with vue-router"),
    }
}

catalog_enum! {
    /// JavaScript runtime the project targets
    Runtime, "runtime" {
        Node => ("node", "Node.js", "Vite dev server on Node"),
        Bun => ("bun", "Bun", "Vite dev server on Bun"),
        Deno => ("deno", "Deno", "Fresh for React, CDN modules for Vue"),
    }
}

catalog_enum! {
    /// Package manager used in the generated instructions
    PackageManager, "package manager" {
        Npm => ("npm", "npm", ""),
        Pnpm => ("pnpm", "pnpm", ""),
        Yarn => ("yarn", "Yarn", ""),
        Bun => ("bun", "bun", ""),
    }
}

catalog_enum! {
    /// Schema validation library
    ValidationLibrary, "validation library" {
        None => ("none", "None", "No validation library"),
        Zod => ("zod", "Zod", "TypeScript-first schema validation"),
        Yup => ("yup", "Yup", "Object schema validation"),
        IoTs => ("io-ts", "io-ts", "Runtime types built on fp-ts"),
        Superstruct => ("superstruct", "Superstruct", "Composable structs"),
        Valibot => ("valibot", "Valibot", "Modular, tree-shakable schemas"),
        Runtypes => ("runtypes", "Runtypes", "Runtime validation for static types"),
    }
}

catalog_enum! {
    /// Typed error-handling library
    ErrorHandlingLibrary, "error handling library" {
        None => ("none", "None", "Plain exceptions"),
        Neverthrow => ("neverthrow", "neverthrow", "Result type with chaining"),
        TsResults => ("ts-results", "ts-results", "Rust-style Result and Option"),
        OxideTs => ("oxide.ts", "oxide.ts", "Rust-style Result and Option with match"),
        TrueMyth => ("true-myth", "True Myth", "Maybe and Result types"),
        PurifyTs => ("purify-ts", "Purify", "Functional Either and Maybe"),
        FpTs => ("fp-ts", "fp-ts", "Typed functional programming"),
    }
}

catalog_enum! {
    /// Test runner or testing library
    TestingLibrary, "testing library" {
        None => ("none", "None", "No test setup"),
        Jest => ("jest", "Jest", "Unit tests with ts-jest"),
        Vitest => ("vitest", "Vitest", "Vite-native unit tests"),
        Cypress => ("cypress", "Cypress", "End-to-end browser tests"),
        Playwright => ("playwright", "Playwright", "Cross-browser end-to-end tests"),
        Puppeteer => ("puppeteer", "Puppeteer", "Headless Chrome scripting"),
        ReactTestingLibrary => ("react-testing-library", "Testing Library", "Component tests on Vitest"),
    }
}

catalog_enum! {
    /// State management library; the legal set depends on the framework
    StateLibrary, "state library" {
        None => ("none", "None", "Component state only"),
        Redux => ("redux", "Redux Toolkit", "Slices with react-redux"),
        Zustand => ("zustand", "Zustand", "Hook-based store"),
        Recoil => ("recoil", "Recoil", "Atoms and selectors"),
        Jotai => ("jotai", "Jotai", "Primitive atoms"),
        Mobx => ("mobx", "MobX", "Observable stores"),
        Valtio => ("valtio", "Valtio", "Proxy state"),
        Nanostores => ("nanostores", "Nano Stores", "Tiny framework-agnostic atoms"),
        ReduxToolkitQuery => ("redux-toolkit-query", "RTK Query", "Data fetching with Redux Toolkit"),
        Pinia => ("pinia", "Pinia", "The official Vue store"),
    }
}

catalog_enum! {
    /// Component library; the legal set depends on the framework
    UiLibrary, "UI library" {
        None => ("none", "None", "Plain HTML and CSS"),
        Mui => ("mui", "MUI", "Material UI components"),
        Antd => ("antd", "Ant Design", "Enterprise React components"),
        ChakraUi => ("chakra-ui", "Chakra UI", "Accessible styled components"),
        Mantine => ("mantine", "Mantine", "Hooks and components"),
        ElementPlus => ("element-plus", "Element Plus", "Desktop UI for Vue 3"),
        Vuetify => ("vuetify", "Vuetify", "Material components for Vue"),
        NaiveUi => ("naive-ui", "Naive UI", "TypeScript Vue 3 components"),
        AntDesignVue => ("ant-design-vue", "Ant Design Vue", "Ant Design for Vue"),
        PrimeVue => ("primevue", "PrimeVue", "Rich Vue component suite"),
    }
}

const REACT_STATE: &[StateLibrary] = &[
    StateLibrary::None,
    StateLibrary::Redux,
    StateLibrary::Zustand,
    StateLibrary::Recoil,
    StateLibrary::Jotai,
    StateLibrary::Mobx,
    StateLibrary::Valtio,
    StateLibrary::Nanostores,
    StateLibrary::ReduxToolkitQuery,
];

const VUE_STATE: &[StateLibrary] = &[
    StateLibrary::None,
    StateLibrary::Pinia,
    StateLibrary::Valtio,
    StateLibrary::Nanostores,
    StateLibrary::Mobx,
    StateLibrary::ReduxToolkitQuery,
];

const REACT_UI: &[UiLibrary] = &[
    UiLibrary::None,
    UiLibrary::Mui,
    UiLibrary::Antd,
    UiLibrary::ChakraUi,
    UiLibrary::Mantine,
];

const VUE_UI: &[UiLibrary] = &[
    UiLibrary::None,
    UiLibrary::ElementPlus,
    UiLibrary::Vuetify,
    UiLibrary::NaiveUi,
    UiLibrary::AntDesignVue,
    UiLibrary::PrimeVue,
];

impl StateLibrary {
    /// Legal state libraries for a framework, in prompt order
    pub fn options_for(framework: Framework) -> &'static [StateLibrary] {
        match framework {
            Framework::React => REACT_STATE,
            Framework::Vue3 => VUE_STATE,
        }
    }

    /// Whether the library needs the application root wrapped in (or registered with) a provider
    pub fn requires_provider(self) -> bool {
        matches!(
            self,
            StateLibrary::Redux
                | StateLibrary::ReduxToolkitQuery
                | StateLibrary::Recoil
                | StateLibrary::Mobx
                | StateLibrary::Pinia
        )
    }
}

impl UiLibrary {
    /// Legal UI libraries for a framework, in prompt order
    pub fn options_for(framework: Framework) -> &'static [UiLibrary] {
        match framework {
            Framework::React => REACT_UI,
            Framework::Vue3 => VUE_UI,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for value in ValidationLibrary::ALL {
            assert_eq!(value.id().parse::<ValidationLibrary>().unwrap(), *value);
        }
        for value in ErrorHandlingLibrary::ALL {
            assert_eq!(value.id().parse::<ErrorHandlingLibrary>().unwrap(), *value);
        }
        for value in StateLibrary::ALL {
            assert_eq!(value.id().parse::<StateLibrary>().unwrap(), *value);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("VUE3".parse::<Framework>().unwrap(), Framework::Vue3);
        assert_eq!(" Oxide.TS ".parse::<ErrorHandlingLibrary>().unwrap(), ErrorHandlingLibrary::OxideTs);
    }

    #[test]
    fn test_unknown_value_names_the_axis() {
        let err = "svelte".parse::<Framework>().unwrap_err();
        assert!(err.to_string().contains("framework"));
        assert!(err.to_string().contains("svelte"));
    }

    #[test]
    fn test_state_domains_differ_by_framework() {
        let react = StateLibrary::options_for(Framework::React);
        let vue = StateLibrary::options_for(Framework::Vue3);

        assert!(react.contains(&StateLibrary::Recoil));
        assert!(!vue.contains(&StateLibrary::Recoil));
        assert!(vue.contains(&StateLibrary::Pinia));
        assert!(!react.contains(&StateLibrary::Pinia));
        assert_eq!(react[0], StateLibrary::None);
        assert_eq!(vue[0], StateLibrary::None);
    }

    #[test]
    fn test_every_state_library_belongs_to_some_framework() {
        for value in StateLibrary::ALL {
            let offered = [Framework::React, Framework::Vue3]
                .iter()
                .any(|fw| StateLibrary::options_for(*fw).contains(value));
            assert!(offered, "{} is not offered anywhere", value.id());
        }
        for value in UiLibrary::ALL {
            let offered = [Framework::React, Framework::Vue3]
                .iter()
                .any(|fw| UiLibrary::options_for(*fw).contains(value));
            assert!(offered, "{} is not offered anywhere", value.id());
        }
    }

    #[test]
    fn test_provider_requiring_set() {
        let requiring: Vec<_> = StateLibrary::ALL
            .iter()
            .filter(|s| s.requires_provider())
            .map(|s| s.id())
            .collect();
        assert_eq!(
            requiring,
            vec!["redux", "recoil", "mobx", "redux-toolkit-query", "pinia"]
        );
    }

    #[test]
    fn test_serde_uses_ids() {
        let yaml = serde_yaml::to_string(&ErrorHandlingLibrary::OxideTs).unwrap();
        assert_eq!(yaml.trim(), "oxide.ts");
        let parsed: TestingLibrary = serde_yaml::from_str("react-testing-library").unwrap();
        assert_eq!(parsed, TestingLibrary::ReactTestingLibrary);
    }
}
