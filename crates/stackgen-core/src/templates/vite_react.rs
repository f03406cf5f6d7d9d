//! React on Vite (node or bun)

use super::fileset::{FileSet, Manifest};
use super::render::{indent, lines, render};
use super::{manifests, snippets, stores, testing, wiring, Blueprint, ImportStyle, Lang};
use crate::catalog::{Package, ValidationLibrary};
use crate::config::Configuration;
use crate::error::Result;
use minijinja::context;
use std::collections::BTreeMap;

const DEPENDENCIES: &[Package] = &[
    Package { name: "react", version: "^18.2.0" },
    Package { name: "react-dom", version: "^18.2.0" },
    Package { name: "react-router-dom", version: "^6.22.3" },
];

const DEV_DEPENDENCIES: &[Package] = &[
    Package { name: "@types/react", version: "^18.2.66" },
    Package { name: "@types/react-dom", version: "^18.2.22" },
    Package { name: "@vitejs/plugin-react", version: "^4.2.1" },
    Package { name: "eslint-plugin-react-hooks", version: "^4.6.0" },
];

pub(crate) struct ViteReact;

impl Blueprint for ViteReact {
    fn base(&self, config: &Configuration) -> FileSet {
        let dependencies: Manifest = DEPENDENCIES.iter().copied().collect();
        let mut dev_dependencies: Manifest = DEV_DEPENDENCIES.iter().copied().collect();
        dev_dependencies.extend(super::VITE_TOOLING);
        dev_dependencies.extend(&[super::runtime_types(config.runtime())]);
        FileSet::new(dependencies, dev_dependencies)
    }

    fn files(&self, config: &Configuration, set: &mut FileSet) -> Result<()> {
        let title = config.project_name();
        let with_signup = config.validation() != ValidationLibrary::None;

        let mut scripts: BTreeMap<&'static str, String> = BTreeMap::from([
            ("dev", "vite".to_string()),
            ("build", "tsc && vite build".to_string()),
            ("preview", "vite preview".to_string()),
            ("lint", "eslint . --ext ts,tsx --report-unused-disable-directives".to_string()),
            ("typecheck", "tsc --noEmit".to_string()),
        ]);
        if let Some(test) = testing::test_command(config) {
            scripts.insert("test", test);
        }
        let package_json =
            manifests::package_json(&title, &scripts, &set.dependencies, &set.dev_dependencies)?;
        set.add("package.json", package_json);

        set.add("tsconfig.json", asset!("vite-react/tsconfig.json"));
        set.add("tsconfig.node.json", asset!("vite-react/tsconfig.node.json"));
        super::add_tooling_files(set, asset!("common/eslintrc.react.json"));
        set.add(
            "index.html",
            render("index.html", asset!("vite-react/index.html"), context! { title })?,
        );
        set.add("vite.config.ts", asset!("vite-react/vite.config.ts"));

        let root = wiring::react_root(config, "./stores/", ImportStyle::VITE, "<App />", true, 4);
        set.add(
            "src/main.tsx",
            render(
                "src/main.tsx",
                asset!("vite-react/src/main.tsx"),
                context! { imports => root.imports, prelude => root.prelude, tree => root.tree },
            )?,
        );

        let (app_imports, links, routes) = if with_signup {
            (
                "import SignUp from './routes/SignUp';\n",
                "        <Link to=\"/signup\">Sign Up</Link>\n",
                "        <Route path=\"/signup\" element={<SignUp />} />\n",
            )
        } else {
            ("", "", "")
        };
        set.add(
            "src/App.tsx",
            render(
                "src/App.tsx",
                asset!("vite-react/src/App.tsx"),
                context! { imports => app_imports, links, routes },
            )?,
        );

        let counter = snippets::react_counter(config.state(), "react", "", "");
        let component = if counter.observer { "observer(Home)" } else { "Home" };
        set.add(
            "src/routes/Home.tsx",
            render(
                "src/routes/Home.tsx",
                asset!("vite-react/src/routes/Home.tsx"),
                context! {
                    imports => counter.imports,
                    setup => counter.setup,
                    extra => indent(&lines(&counter.extra), 6),
                    component,
                },
            )?,
        );
        set.add("src/routes/About.tsx", asset!("vite-react/src/routes/About.tsx"));
        set.add("src/components/Hello.tsx", asset!("vite-react/src/components/Hello.tsx"));

        super::add_library_modules(config, set, "src/", Lang::Ts);
        if with_signup {
            set.add(
                "src/routes/SignUp.tsx",
                render(
                    "src/routes/SignUp.tsx",
                    asset!("common/SignUp.react.tsx"),
                    context! { hooks => "react", validation_path => "../validation/userSchema" },
                )?,
            );
        }

        for (name, content) in stores::react_stores(config.state(), "")? {
            set.add(format!("src/stores/{}", name), content);
        }
        for (path, content) in testing::files(config)? {
            set.add(path, content);
        }

        Ok(())
    }
}
