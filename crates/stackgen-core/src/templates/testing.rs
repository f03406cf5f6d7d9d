//! Test runner configuration and example tests

use super::render::render;
use super::Lang;
use crate::catalog::TestingLibrary;
use crate::config::{Configuration, Quadrant};
use crate::error::Result;
use crate::report;
use minijinja::context;

/// Where the generated app is served and what its home page shows
struct Target {
    lang: Lang,
    base_url: &'static str,
    heading: &'static str,
    /// Directory of the unit tests
    tests_dir: &'static str,
    /// Whether commands run through `deno task`
    deno: bool,
}

fn target(quadrant: Quadrant) -> Target {
    match quadrant {
        Quadrant::ViteReact | Quadrant::ViteVue => Target {
            lang: Lang::Ts,
            base_url: "http://localhost:5173",
            heading: "Home Page",
            tests_dir: "src/",
            deno: false,
        },
        Quadrant::Fresh => Target {
            lang: Lang::Ts,
            base_url: "http://localhost:8000",
            heading: "Fresh + React",
            tests_dir: "tests/",
            deno: true,
        },
        Quadrant::VueCdn => Target {
            lang: Lang::Js,
            base_url: "http://localhost:8000",
            heading: "Home Page",
            tests_dir: "tests/",
            deno: true,
        },
    }
}

/// The `test` script (package.json) or task (deno.json) for the testing library
pub(crate) fn test_command(config: &Configuration) -> Option<String> {
    let target = target(config.quadrant());
    let ext = target.lang.ext();
    let command = match (config.testing(), target.deno) {
        (TestingLibrary::None, _) => return None,
        (TestingLibrary::Jest, false) => "jest".to_string(),
        (TestingLibrary::Vitest | TestingLibrary::ReactTestingLibrary, false) => "vitest run".to_string(),
        (TestingLibrary::Cypress, false) => "cypress run".to_string(),
        (TestingLibrary::Playwright, false) => "playwright test".to_string(),
        (TestingLibrary::Puppeteer, false) => format!("tsx e2e/home.puppeteer.{}", ext),
        (TestingLibrary::Jest, true) => "deno run -A npm:jest".to_string(),
        (TestingLibrary::Vitest | TestingLibrary::ReactTestingLibrary, true) => {
            "deno run -A npm:vitest run".to_string()
        }
        (TestingLibrary::Cypress, true) => "deno run -A npm:cypress run".to_string(),
        (TestingLibrary::Playwright, true) => "deno run -A npm:@playwright/test test".to_string(),
        (TestingLibrary::Puppeteer, true) => format!("deno run -A e2e/home.puppeteer.{}", ext),
    };
    Some(command)
}

/// Config and example test files for the configured testing library
pub(crate) fn files(config: &Configuration) -> Result<Vec<(String, String)>> {
    let quadrant = config.quadrant();
    let target = target(quadrant);
    let ext = target.lang.ext();
    let mut files = Vec::new();

    match config.testing() {
        TestingLibrary::None => {}
        TestingLibrary::Jest => {
            let environment = if quadrant == Quadrant::ViteReact { "jsdom" } else { "node" };
            let (name, source) = match target.lang {
                Lang::Ts => ("jest.config.ts", asset!("testing/jest.config.ts")),
                Lang::Js => ("jest.config.js", asset!("testing/jest.config.js")),
            };
            files.push((name.to_string(), render(name, source, context! { environment })?));
            files.push(example_test(&target, "")?);
        }
        TestingLibrary::Vitest | TestingLibrary::ReactTestingLibrary => {
            let testing_library = config.testing() == TestingLibrary::ReactTestingLibrary;
            files.push(vitest_config(quadrant, &target, testing_library)?);

            match (quadrant, testing_library) {
                (Quadrant::ViteReact, true) => {
                    files.push(("src/setupTests.ts".to_string(), asset!("testing/setupTests.ts").to_string()));
                    files.push((
                        "src/components/Hello.test.tsx".to_string(),
                        asset!("testing/Hello.test.tsx").to_string(),
                    ));
                }
                (Quadrant::ViteVue, true) => {
                    files.push(("src/setupTests.ts".to_string(), asset!("testing/setupTests.ts").to_string()));
                    files.push((
                        "src/components/HelloWorld.test.ts".to_string(),
                        asset!("testing/HelloWorld.testing-library.ts").to_string(),
                    ));
                }
                (Quadrant::ViteVue, false) => files.push((
                    "src/components/HelloWorld.test.ts".to_string(),
                    asset!("testing/HelloWorld.test-utils.ts").to_string(),
                )),
                _ => files.push(example_test(&target, "import { describe, it, expect } from 'vitest';\n")?),
            }
        }
        TestingLibrary::Cypress => {
            let name = format!("cypress.config.{}", ext);
            let content = render(&name, asset!("testing/cypress.config"), context! { base_url => target.base_url, lang => ext })?;
            files.push((name, content));
            let name = format!("cypress/e2e/home.cy.{}", ext);
            let content = render(&name, asset!("testing/home.cy"), context! { heading => target.heading })?;
            files.push((name, content));
        }
        TestingLibrary::Playwright => {
            let dev = if target.deno {
                "deno task start".to_string()
            } else {
                report::commands(config.package_manager()).1.to_string()
            };
            let name = format!("playwright.config.{}", ext);
            let content = render(&name, asset!("testing/playwright.config"), context! { base_url => target.base_url, dev })?;
            files.push((name, content));
            let name = format!("e2e/home.spec.{}", ext);
            let content = render(&name, asset!("testing/home.spec"), context! { heading => target.heading })?;
            files.push((name, content));
        }
        TestingLibrary::Puppeteer => {
            let name = format!("e2e/home.puppeteer.{}", ext);
            let content = render(
                &name,
                asset!("testing/home.puppeteer"),
                context! { base_url => target.base_url, heading => target.heading },
            )?;
            files.push((name, content));
        }
    }

    Ok(files)
}

fn example_test(target: &Target, imports: &str) -> Result<(String, String)> {
    let name = format!("{}example.test.{}", target.tests_dir, target.lang.ext());
    let source = match target.lang {
        Lang::Ts => asset!("testing/example.test.ts"),
        Lang::Js => asset!("testing/example.test.js"),
    };
    let content = render(&name, source, context! { imports })?;
    Ok((name, content))
}

fn vitest_config(quadrant: Quadrant, target: &Target, testing_library: bool) -> Result<(String, String)> {
    let (imports, plugins) = match quadrant {
        Quadrant::ViteVue => ("import vue from '@vitejs/plugin-vue';\n", "  plugins: [vue()],\n"),
        Quadrant::ViteReact if testing_library => {
            ("import react from '@vitejs/plugin-react';\n", "  plugins: [react()],\n")
        }
        _ => ("", ""),
    };
    let environment = if testing_library || quadrant == Quadrant::ViteVue {
        "jsdom"
    } else {
        "node"
    };
    let setup = if testing_library && !target.deno {
        "    setupFiles: ['./src/setupTests.ts'],\n"
    } else {
        ""
    };

    let name = format!("vitest.config.{}", target.lang.ext());
    let content = render(
        &name,
        asset!("testing/vitest.config.ts"),
        context! { imports, plugins, environment, setup },
    )?;
    Ok((name, content))
}
