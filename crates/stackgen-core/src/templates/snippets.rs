//! Counter demo wiring per state library
//!
//! Every starter page shows a `count` value and an `increment` action; where
//! they come from depends on the state library.

use super::render::lines;
use crate::catalog::StateLibrary;

/// Counter code for a React component
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReactCounter {
    pub imports: String,
    /// Statements at the top of the component body, indented two spaces
    pub setup: String,
    /// Extra JSX lines rendered below the counter
    pub extra: Vec<String>,
    /// Whether the component must be wrapped in mobx `observer`
    pub observer: bool,
}

/// Counter code for a React component.
///
/// `hooks` is the module React hooks are imported from (`react` or
/// `preact/hooks`); `ext` is the suffix of store module imports.
pub(crate) fn react_counter(state: StateLibrary, hooks: &str, ext: &str, jsx_ext: &str) -> ReactCounter {
    let store = |module: &str| format!("../stores/{}{}", module, ext);

    let (imports, setup, extra): (Vec<String>, Vec<&str>, Vec<&str>) = match state {
        StateLibrary::None => (
            vec![format!("import {{ useState }} from '{}';", hooks)],
            vec![
                "const [count, setCount] = useState(0);",
                "const increment = () => setCount((c) => c + 1);",
            ],
            vec![],
        ),
        StateLibrary::Redux => (
            vec![
                format!("import {{ useAppDispatch, useAppSelector }} from '{}';", store("hooks")),
                format!("import {{ increment as incrementCounter }} from '{}';", store("counterSlice")),
            ],
            vec![
                "const count = useAppSelector((state) => state.counter.value);",
                "const dispatch = useAppDispatch();",
                "const increment = () => dispatch(incrementCounter());",
            ],
            vec![],
        ),
        StateLibrary::ReduxToolkitQuery => (
            vec![
                format!("import {{ useAppDispatch, useAppSelector }} from '{}';", store("hooks")),
                format!("import {{ increment as incrementCounter }} from '{}';", store("counterSlice")),
                format!("import {{ useGetTodoQuery }} from '{}';", store("api")),
            ],
            vec![
                "const count = useAppSelector((state) => state.counter.value);",
                "const dispatch = useAppDispatch();",
                "const increment = () => dispatch(incrementCounter());",
                "const { data: todo, isLoading } = useGetTodoQuery(1);",
            ],
            vec!["<p>{isLoading ? 'Loading todo...' : todo?.title}</p>"],
        ),
        StateLibrary::Zustand => (
            vec![format!("import {{ useCounter }} from '{}';", store("useCounter"))],
            vec!["const { count, increment } = useCounter();"],
            vec![],
        ),
        StateLibrary::Recoil => (
            vec![
                "import { useRecoilState } from 'recoil';".to_string(),
                format!("import {{ counterAtom }} from '{}';", store("counterAtom")),
            ],
            vec![
                "const [count, setCount] = useRecoilState(counterAtom);",
                "const increment = () => setCount((c) => c + 1);",
            ],
            vec![],
        ),
        StateLibrary::Jotai => (
            vec![
                "import { useAtom } from 'jotai';".to_string(),
                format!("import {{ counterAtom }} from '{}';", store("counterAtom")),
            ],
            vec![
                "const [count, setCount] = useAtom(counterAtom);",
                "const increment = () => setCount((c) => c + 1);",
            ],
            vec![],
        ),
        StateLibrary::Mobx => (
            vec![
                "import { observer } from 'mobx-react-lite';".to_string(),
                format!("import {{ useCounterStore }} from '../stores/counterStore{}';", jsx_ext),
            ],
            vec![
                "const store = useCounterStore();",
                "const count = store.count;",
                "const increment = () => store.increment();",
            ],
            vec![],
        ),
        StateLibrary::Valtio => (
            vec![
                "import { useSnapshot } from 'valtio';".to_string(),
                format!("import {{ counterState, increment }} from '{}';", store("counterState")),
            ],
            vec!["const { count } = useSnapshot(counterState);"],
            vec![],
        ),
        StateLibrary::Nanostores => (
            vec![
                "import { useStore } from '@nanostores/react';".to_string(),
                format!("import {{ $counter, increment }} from '{}';", store("counter")),
            ],
            vec!["const count = useStore($counter);"],
            vec![],
        ),
        StateLibrary::Pinia => unreachable!("pinia is not offered for React"),
    };

    ReactCounter {
        imports: lines(&imports),
        setup: lines(setup.iter().map(|line| format!("  {}", line))),
        extra: extra.into_iter().map(str::to_string).collect(),
        observer: state == StateLibrary::Mobx,
    }
}

/// Counter code for a Vue component
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VueCounter {
    pub imports: String,
    /// Setup statements, unindented
    pub setup: String,
    /// Bindings exposed to the template
    pub bindings: &'static str,
    /// Extra template lines rendered below the counter
    pub extra: Vec<String>,
}

/// Counter code for a Vue component; `ext` is the suffix of store module imports
pub(crate) fn vue_counter(state: StateLibrary, ext: &str) -> VueCounter {
    let store = |module: &str| format!("../stores/{}{}", module, ext);

    let (imports, setup, bindings, extra): (Vec<String>, Vec<&str>, &'static str, Vec<&str>) =
        match state {
            StateLibrary::None => (
                vec!["import { ref } from 'vue';".to_string()],
                vec![
                    "const count = ref(0);",
                    "const increment = () => {",
                    "  count.value += 1;",
                    "};",
                ],
                "count, increment",
                vec![],
            ),
            StateLibrary::Pinia => (
                vec![
                    "import { storeToRefs } from 'pinia';".to_string(),
                    format!("import {{ useCounterStore }} from '{}';", store("counter")),
                ],
                vec![
                    "const counter = useCounterStore();",
                    "const { count } = storeToRefs(counter);",
                    "const { increment } = counter;",
                ],
                "count, increment",
                vec![],
            ),
            StateLibrary::Valtio => (
                vec![
                    "import { ref, onUnmounted } from 'vue';".to_string(),
                    "import { subscribe } from 'valtio/vanilla';".to_string(),
                    format!("import {{ counterState, increment }} from '{}';", store("counterState")),
                ],
                vec![
                    "const count = ref(counterState.count);",
                    "const unsubscribe = subscribe(counterState, () => {",
                    "  count.value = counterState.count;",
                    "});",
                    "onUnmounted(unsubscribe);",
                ],
                "count, increment",
                vec![],
            ),
            StateLibrary::Nanostores => (
                vec![
                    "import { useStore } from '@nanostores/vue';".to_string(),
                    format!("import {{ $counter, increment }} from '{}';", store("counter")),
                ],
                vec!["const count = useStore($counter);"],
                "count, increment",
                vec![],
            ),
            StateLibrary::Mobx => (
                vec![
                    "import { ref, onUnmounted } from 'vue';".to_string(),
                    "import { reaction } from 'mobx';".to_string(),
                    format!("import {{ useCounterStore }} from '{}';", store("counterStore")),
                ],
                vec![
                    "const store = useCounterStore();",
                    "const count = ref(store.count);",
                    "const dispose = reaction(",
                    "  () => store.count,",
                    "  (value) => {",
                    "    count.value = value;",
                    "  },",
                    ");",
                    "onUnmounted(dispose);",
                    "const increment = () => store.increment();",
                ],
                "count, increment",
                vec![],
            ),
            StateLibrary::ReduxToolkitQuery => (
                vec![
                    "import { ref, onUnmounted } from 'vue';".to_string(),
                    format!("import {{ useAppStore }} from '{}';", store("store")),
                    format!("import {{ increment as incrementCounter }} from '{}';", store("counterSlice")),
                    format!("import {{ api }} from '{}';", store("api")),
                ],
                vec![
                    "const store = useAppStore();",
                    "const count = ref(store.getState().counter.value);",
                    "const todoTitle = ref('Loading todo...');",
                    "const unsubscribe = store.subscribe(() => {",
                    "  count.value = store.getState().counter.value;",
                    "});",
                    "onUnmounted(unsubscribe);",
                    "store.dispatch(api.endpoints.getTodo.initiate(1)).then((result) => {",
                    "  todoTitle.value = result.data?.title ?? 'Todo unavailable';",
                    "});",
                    "const increment = () => store.dispatch(incrementCounter());",
                ],
                "count, increment, todoTitle",
                vec!["<p>{{ todoTitle }}</p>"],
            ),
            other => unreachable!("{:?} is not offered for Vue", other),
        };

    VueCounter {
        imports: lines(&imports),
        setup: lines(&setup),
        bindings,
        extra: extra.into_iter().map(str::to_string).collect(),
    }
}
