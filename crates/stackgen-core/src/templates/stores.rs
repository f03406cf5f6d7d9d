//! Store modules generated for each state library

use super::render::render;
use super::Lang;
use crate::catalog::StateLibrary;
use crate::error::Result;
use minijinja::context;

type Source = (&'static str, &'static str);

const COUNTER_SLICE: Source = ("counterSlice.ts", asset!("state/react/redux/counterSlice.ts"));
const REDUX_HOOKS: Source = ("hooks.ts", asset!("state/react/redux/hooks.ts"));

fn react_sources(state: StateLibrary) -> &'static [Source] {
    match state {
        StateLibrary::None => &[],
        StateLibrary::Redux => &[
            ("store.ts", asset!("state/react/redux/store.ts")),
            COUNTER_SLICE,
            REDUX_HOOKS,
        ],
        StateLibrary::ReduxToolkitQuery => &[
            ("store.ts", asset!("state/react/redux-toolkit-query/store.ts")),
            ("api.ts", asset!("state/react/redux-toolkit-query/api.ts")),
            COUNTER_SLICE,
            REDUX_HOOKS,
        ],
        StateLibrary::Zustand => &[("useCounter.ts", asset!("state/react/zustand/useCounter.ts"))],
        StateLibrary::Recoil => &[("counterAtom.ts", asset!("state/react/recoil/counterAtom.ts"))],
        StateLibrary::Jotai => &[("counterAtom.ts", asset!("state/react/jotai/counterAtom.ts"))],
        StateLibrary::Mobx => &[("counterStore.tsx", asset!("state/react/mobx/counterStore.tsx"))],
        StateLibrary::Valtio => &[("counterState.ts", asset!("state/react/valtio/counterState.ts"))],
        StateLibrary::Nanostores => &[("counter.ts", asset!("state/react/nanostores/counter.ts"))],
        StateLibrary::Pinia => unreachable!("pinia is not offered for React"),
    }
}

fn vue_sources(state: StateLibrary, lang: Lang) -> &'static [Source] {
    match (state, lang) {
        (StateLibrary::None, _) => &[],
        (StateLibrary::Pinia, Lang::Ts) => &[("counter.ts", asset!("state/vue/pinia/counter.ts"))],
        (StateLibrary::Pinia, Lang::Js) => &[("counter.js", asset!("state/vue-js/pinia/counter.js"))],
        (StateLibrary::Valtio, Lang::Ts) => &[("counterState.ts", asset!("state/vue/valtio/counterState.ts"))],
        (StateLibrary::Valtio, Lang::Js) => &[("counterState.js", asset!("state/vue-js/valtio/counterState.js"))],
        (StateLibrary::Nanostores, Lang::Ts) => &[("counter.ts", asset!("state/vue/nanostores/counter.ts"))],
        (StateLibrary::Nanostores, Lang::Js) => &[("counter.js", asset!("state/vue-js/nanostores/counter.js"))],
        (StateLibrary::Mobx, Lang::Ts) => &[("counterStore.ts", asset!("state/vue/mobx/counterStore.ts"))],
        (StateLibrary::Mobx, Lang::Js) => &[("counterStore.js", asset!("state/vue-js/mobx/counterStore.js"))],
        (StateLibrary::ReduxToolkitQuery, Lang::Ts) => &[
            ("store.ts", asset!("state/vue/redux-toolkit-query/store.ts")),
            ("api.ts", asset!("state/vue/redux-toolkit-query/api.ts")),
            COUNTER_SLICE,
        ],
        (StateLibrary::ReduxToolkitQuery, Lang::Js) => &[
            ("store.js", asset!("state/vue-js/redux-toolkit-query/store.js")),
            ("api.js", asset!("state/vue-js/redux-toolkit-query/api.js")),
            ("counterSlice.js", asset!("state/vue-js/redux-toolkit-query/counterSlice.js")),
        ],
        (other, _) => unreachable!("{:?} is not offered for Vue", other),
    }
}

fn render_all(sources: &[Source], ext: &str) -> Result<Vec<(&'static str, String)>> {
    sources
        .iter()
        .map(|(name, source)| Ok((*name, render(name, source, context! { ext => ext })?)))
        .collect()
}

/// React store modules as `(file name, content)`, relative to the stores directory
pub(crate) fn react_stores(state: StateLibrary, ext: &str) -> Result<Vec<(&'static str, String)>> {
    render_all(react_sources(state), ext)
}

/// Vue store modules as `(file name, content)`, relative to the stores directory
pub(crate) fn vue_stores(state: StateLibrary, lang: Lang, ext: &str) -> Result<Vec<(&'static str, String)>> {
    render_all(vue_sources(state, lang), ext)
}
