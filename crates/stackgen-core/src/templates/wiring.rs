//! Cross-axis wiring of the application entry point
//!
//! State libraries that need a provider, and every UI library, touch the
//! entry point. React roots are wrapped in provider elements (outermost state,
//! then UI, then router); Vue apps register plugins or provide stores.

use super::render::{indent, lines};
use super::ImportStyle;
use crate::catalog::{StateLibrary, UiLibrary};
use crate::config::Configuration;

/// An element that wraps the rest of a React tree
#[derive(Debug, Clone, PartialEq, Eq)]
struct Wrapper {
    open: String,
    close: String,
}

impl Wrapper {
    fn new(name: &str, props: &str) -> Self {
        let open = if props.is_empty() {
            format!("<{}>", name)
        } else {
            format!("<{} {}>", name, props)
        };
        Self {
            open,
            close: format!("</{}>", name),
        }
    }
}

/// Imports, top-level statements and the nested element tree of a React root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ReactRoot {
    pub imports: String,
    pub prelude: String,
    pub tree: String,
}

/// Build the React root for `config`.
///
/// `stores` is the import prefix of the stores directory as seen from the entry
/// point; `innermost` is the element at the center of the tree. With `router`,
/// a `BrowserRouter` (imported by the entry template) is the innermost wrapper.
pub(crate) fn react_root(
    config: &Configuration,
    stores: &str,
    style: ImportStyle,
    innermost: &str,
    router: bool,
    depth: usize,
) -> ReactRoot {
    let mut imports: Vec<String> = Vec::new();
    let mut prelude: Vec<String> = Vec::new();
    let mut wrappers: Vec<Wrapper> = Vec::new();

    match config.state() {
        StateLibrary::Redux | StateLibrary::ReduxToolkitQuery => {
            imports.push("import { Provider } from 'react-redux';".to_string());
            imports.push(format!(
                "import {{ store }} from '{}store{}';",
                stores, style.script_ext
            ));
            wrappers.push(Wrapper::new("Provider", "store={store}"));
        }
        StateLibrary::Recoil => {
            imports.push("import { RecoilRoot } from 'recoil';".to_string());
            wrappers.push(Wrapper::new("RecoilRoot", ""));
        }
        StateLibrary::Mobx => {
            imports.push(format!(
                "import {{ CounterStoreProvider }} from '{}counterStore{}';",
                stores, style.jsx_ext
            ));
            wrappers.push(Wrapper::new("CounterStoreProvider", ""));
        }
        StateLibrary::None
        | StateLibrary::Zustand
        | StateLibrary::Jotai
        | StateLibrary::Valtio
        | StateLibrary::Nanostores => {}
        StateLibrary::Pinia => unreachable!("pinia is not offered for React"),
    }

    match config.ui() {
        UiLibrary::None => {}
        UiLibrary::Mui => {
            imports.push("import { ThemeProvider, createTheme } from '@mui/material/styles';".to_string());
            prelude.push("const theme = createTheme();".to_string());
            wrappers.push(Wrapper::new("ThemeProvider", "theme={theme}"));
        }
        UiLibrary::Antd => {
            imports.push("import { ConfigProvider } from 'antd';".to_string());
            wrappers.push(Wrapper::new("ConfigProvider", ""));
        }
        UiLibrary::ChakraUi => {
            imports.push("import { ChakraProvider } from '@chakra-ui/react';".to_string());
            wrappers.push(Wrapper::new("ChakraProvider", ""));
        }
        UiLibrary::Mantine => {
            if style.bundled {
                imports.push("import '@mantine/core/styles.css';".to_string());
            }
            imports.push("import { MantineProvider } from '@mantine/core';".to_string());
            wrappers.push(Wrapper::new("MantineProvider", ""));
        }
        other => unreachable!("{:?} is not offered for React", other),
    }

    if router {
        wrappers.push(Wrapper::new("BrowserRouter", ""));
    }

    ReactRoot {
        imports: lines(&imports),
        prelude: if prelude.is_empty() {
            String::new()
        } else {
            format!("\n{}", lines(&prelude))
        },
        tree: nest(&wrappers, innermost, depth),
    }
}

/// Render wrappers around `innermost`, two spaces per level starting at `depth`
fn nest(wrappers: &[Wrapper], innermost: &str, depth: usize) -> String {
    let mut body = String::new();
    for (level, wrapper) in wrappers.iter().enumerate() {
        body.push_str(&indent(&wrapper.open, depth + level * 2));
    }
    body.push_str(&indent(innermost, depth + wrappers.len() * 2));
    for (level, wrapper) in wrappers.iter().enumerate().rev() {
        body.push_str(&indent(&wrapper.close, depth + level * 2));
    }
    body
}

/// Imports and `app.*` statements of a Vue entry point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct VueEntry {
    pub imports: String,
    pub registrations: String,
}

/// Build the Vue plugin/provide registrations for `config`
pub(crate) fn vue_entry(config: &Configuration, style: ImportStyle) -> VueEntry {
    let mut imports: Vec<String> = Vec::new();
    let mut registrations: Vec<String> = Vec::new();

    match config.state() {
        StateLibrary::Pinia => {
            imports.push("import { createPinia } from 'pinia';".to_string());
            registrations.push("app.use(createPinia());".to_string());
        }
        StateLibrary::Mobx => {
            imports.push(format!(
                "import {{ counterStore, CounterStoreKey }} from './stores/counterStore{}';",
                style.script_ext
            ));
            registrations.push("app.provide(CounterStoreKey, counterStore);".to_string());
        }
        StateLibrary::ReduxToolkitQuery => {
            imports.push(format!(
                "import {{ store, StoreKey }} from './stores/store{}';",
                style.script_ext
            ));
            registrations.push("app.provide(StoreKey, store);".to_string());
        }
        StateLibrary::None | StateLibrary::Valtio | StateLibrary::Nanostores => {}
        other => unreachable!("{:?} is not offered for Vue", other),
    }

    match config.ui() {
        UiLibrary::None => {}
        UiLibrary::ElementPlus => {
            imports.push("import ElementPlus from 'element-plus';".to_string());
            if style.bundled {
                imports.push("import 'element-plus/dist/index.css';".to_string());
            }
            registrations.push("app.use(ElementPlus);".to_string());
        }
        UiLibrary::Vuetify => {
            if style.bundled {
                imports.push("import 'vuetify/styles';".to_string());
            }
            imports.push("import { createVuetify } from 'vuetify';".to_string());
            imports.push("import * as components from 'vuetify/components';".to_string());
            imports.push("import * as directives from 'vuetify/directives';".to_string());
            registrations.push("app.use(createVuetify({ components, directives }));".to_string());
        }
        UiLibrary::NaiveUi => {
            imports.push("import naive from 'naive-ui';".to_string());
            registrations.push("app.use(naive);".to_string());
        }
        UiLibrary::AntDesignVue => {
            imports.push("import Antd from 'ant-design-vue';".to_string());
            if style.bundled {
                imports.push("import 'ant-design-vue/dist/reset.css';".to_string());
            }
            registrations.push("app.use(Antd);".to_string());
        }
        UiLibrary::PrimeVue => {
            imports.push("import PrimeVue from 'primevue/config';".to_string());
            registrations.push("app.use(PrimeVue);".to_string());
        }
        other => unreachable!("{:?} is not offered for Vue", other),
    }

    VueEntry {
        imports: lines(&imports),
        registrations: lines(&registrations),
    }
}
