//! Package lookup tables: which npm packages each axis value pulls in

use super::options::{
    CatalogOption, ErrorHandlingLibrary, Framework, Runtime, StateLibrary, TestingLibrary,
    UiLibrary, ValidationLibrary,
};

/// A package name and its version range (or a full import specifier for Deno)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub version: &'static str,
}

/// Which manifest section a contribution is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dependencies,
    DevDependencies,
}

/// The packages one axis value adds to the project manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub section: Section,
    pub packages: &'static [Package],
}

impl Contribution {
    const fn runtime(packages: &'static [Package]) -> Self {
        Self {
            section: Section::Dependencies,
            packages,
        }
    }

    const fn dev(packages: &'static [Package]) -> Self {
        Self {
            section: Section::DevDependencies,
            packages,
        }
    }
}

const FP_TS: Package = Package { name: "fp-ts", version: "^2.16.2" };
const VITEST: Package = Package { name: "vitest", version: "^1.3.1" };
const JSDOM: Package = Package { name: "jsdom", version: "^24.0.0" };
const JEST: Package = Package { name: "jest", version: "^29.7.0" };
const TS_JEST: Package = Package { name: "ts-jest", version: "^29.1.2" };
const TYPES_JEST: Package = Package { name: "@types/jest", version: "^29.5.12" };
// Jest loads a jest.config.ts through ts-node
const TS_NODE: Package = Package { name: "ts-node", version: "^10.9.2" };
const JEST_DOM: Package = Package { name: "@testing-library/jest-dom", version: "^6.4.2" };
const REDUX_TOOLKIT: Package = Package { name: "@reduxjs/toolkit", version: "^2.2.1" };
const REACT_REDUX: Package = Package { name: "react-redux", version: "^9.1.0" };
const MOBX: Package = Package { name: "mobx", version: "^6.12.0" };
const EMOTION_REACT: Package = Package { name: "@emotion/react", version: "^11.11.4" };
const EMOTION_STYLED: Package = Package { name: "@emotion/styled", version: "^11.11.0" };

impl ValidationLibrary {
    /// Packages added for this validation library; `None` adds nothing
    pub fn packages(self) -> Option<Contribution> {
        let packages: &'static [Package] = match self {
            ValidationLibrary::None => return None,
            ValidationLibrary::Zod => &[Package { name: "zod", version: "^3.22.4" }],
            ValidationLibrary::Yup => &[Package { name: "yup", version: "^1.3.3" }],
            ValidationLibrary::IoTs => &[Package { name: "io-ts", version: "^2.2.21" }, FP_TS],
            ValidationLibrary::Superstruct => &[Package { name: "superstruct", version: "^1.0.4" }],
            ValidationLibrary::Valibot => &[Package { name: "valibot", version: "^0.30.0" }],
            ValidationLibrary::Runtypes => &[Package { name: "runtypes", version: "^6.7.0" }],
        };
        Some(Contribution::runtime(packages))
    }
}

impl ErrorHandlingLibrary {
    /// Packages added for this error-handling library; `None` adds nothing
    pub fn packages(self) -> Option<Contribution> {
        let packages: &'static [Package] = match self {
            ErrorHandlingLibrary::None => return None,
            ErrorHandlingLibrary::Neverthrow => &[Package { name: "neverthrow", version: "^6.1.0" }],
            ErrorHandlingLibrary::TsResults => &[Package { name: "ts-results", version: "^3.3.0" }],
            ErrorHandlingLibrary::OxideTs => &[Package { name: "oxide.ts", version: "^1.1.0" }],
            ErrorHandlingLibrary::TrueMyth => &[Package { name: "true-myth", version: "^7.1.0" }],
            ErrorHandlingLibrary::PurifyTs => &[Package { name: "purify-ts", version: "^2.0.3" }],
            ErrorHandlingLibrary::FpTs => &[FP_TS],
        };
        Some(Contribution::runtime(packages))
    }
}

impl TestingLibrary {
    /// Dev packages added for this testing setup; `None` adds nothing
    ///
    /// React on Deno is Fresh, which renders with Preact.
    pub fn packages(self, framework: Framework, runtime: Runtime) -> Option<Contribution> {
        let preact = framework == Framework::React && runtime == Runtime::Deno;
        let packages: &'static [Package] = match (self, framework) {
            (TestingLibrary::None, _) => return None,
            (TestingLibrary::Jest, Framework::React) => &[
                JEST,
                TS_JEST,
                TYPES_JEST,
                TS_NODE,
                Package { name: "jest-environment-jsdom", version: "^29.7.0" },
            ],
            (TestingLibrary::Jest, Framework::Vue3) => &[JEST, TS_JEST, TYPES_JEST, TS_NODE],
            (TestingLibrary::Vitest, Framework::React) => &[VITEST],
            (TestingLibrary::Vitest, Framework::Vue3) => &[VITEST, Package { name: "@vue/test-utils", version: "^2.4.5" }, JSDOM],
            (TestingLibrary::Cypress, _) => &[Package { name: "cypress", version: "^13.6.6" }],
            (TestingLibrary::Playwright, _) => &[Package { name: "@playwright/test", version: "^1.42.1" }],
            (TestingLibrary::Puppeteer, _) => &[Package { name: "puppeteer", version: "^22.4.1" }, Package { name: "tsx", version: "^4.7.1" }],
            (TestingLibrary::ReactTestingLibrary, Framework::React) if preact => &[
                Package { name: "@testing-library/preact", version: "^3.2.3" },
                JEST_DOM,
                VITEST,
                JSDOM,
            ],
            (TestingLibrary::ReactTestingLibrary, Framework::React) => &[
                Package { name: "@testing-library/react", version: "^14.2.1" },
                JEST_DOM,
                VITEST,
                JSDOM,
            ],
            (TestingLibrary::ReactTestingLibrary, Framework::Vue3) => &[
                Package { name: "@testing-library/vue", version: "^8.0.2" },
                JEST_DOM,
                VITEST,
                JSDOM,
            ],
        };
        Some(Contribution::dev(packages))
    }
}

impl StateLibrary {
    /// Packages added for this state library; `None` adds nothing
    ///
    /// Panics when the library is not offered for `framework`; a `Configuration`
    /// never holds such a pair.
    pub fn packages(self, framework: Framework) -> Option<Contribution> {
        let packages: &'static [Package] = match (self, framework) {
            (StateLibrary::None, _) => return None,
            (StateLibrary::Redux, Framework::React) => &[REDUX_TOOLKIT, REACT_REDUX],
            (StateLibrary::Zustand, Framework::React) => &[Package { name: "zustand", version: "^4.5.2" }],
            (StateLibrary::Recoil, Framework::React) => &[Package { name: "recoil", version: "^0.7.7" }],
            (StateLibrary::Jotai, Framework::React) => &[Package { name: "jotai", version: "^2.7.0" }],
            (StateLibrary::Mobx, Framework::React) => {
                &[MOBX, Package { name: "mobx-react-lite", version: "^4.0.5" }]
            }
            (StateLibrary::Mobx, Framework::Vue3) => &[MOBX],
            (StateLibrary::Valtio, _) => &[Package { name: "valtio", version: "^1.13.2" }],
            (StateLibrary::Nanostores, Framework::React) => {
                &[Package { name: "nanostores", version: "^0.10.0" }, Package { name: "@nanostores/react", version: "^0.7.2" }]
            }
            (StateLibrary::Nanostores, Framework::Vue3) => {
                &[Package { name: "nanostores", version: "^0.10.0" }, Package { name: "@nanostores/vue", version: "^0.10.0" }]
            }
            (StateLibrary::ReduxToolkitQuery, Framework::React) => &[REDUX_TOOLKIT, REACT_REDUX],
            (StateLibrary::ReduxToolkitQuery, Framework::Vue3) => &[REDUX_TOOLKIT],
            (StateLibrary::Pinia, Framework::Vue3) => &[Package { name: "pinia", version: "^2.1.7" }],
            (state, framework) => unreachable!(
                "state library {} is not offered for {}",
                state.id(),
                framework.id()
            ),
        };
        Some(Contribution::runtime(packages))
    }
}

impl UiLibrary {
    /// Packages added for this UI library; `None` adds nothing
    ///
    /// Panics when the library is not offered for `framework`.
    pub fn packages(self, framework: Framework) -> Option<Contribution> {
        let packages: &'static [Package] = match (self, framework) {
            (UiLibrary::None, _) => return None,
            (UiLibrary::Mui, Framework::React) => {
                &[Package { name: "@mui/material", version: "^5.15.12" }, EMOTION_REACT, EMOTION_STYLED]
            }
            (UiLibrary::Antd, Framework::React) => &[Package { name: "antd", version: "^5.15.1" }],
            (UiLibrary::ChakraUi, Framework::React) => {
                &[Package { name: "@chakra-ui/react", version: "^2.8.2" }, EMOTION_REACT, EMOTION_STYLED]
            }
            (UiLibrary::Mantine, Framework::React) => {
                &[Package { name: "@mantine/core", version: "^7.6.2" }, Package { name: "@mantine/hooks", version: "^7.6.2" }]
            }
            (UiLibrary::ElementPlus, Framework::Vue3) => &[Package { name: "element-plus", version: "^2.6.1" }],
            (UiLibrary::Vuetify, Framework::Vue3) => &[Package { name: "vuetify", version: "^3.5.8" }],
            (UiLibrary::NaiveUi, Framework::Vue3) => &[Package { name: "naive-ui", version: "^2.38.1" }],
            (UiLibrary::AntDesignVue, Framework::Vue3) => &[Package { name: "ant-design-vue", version: "^4.1.2" }],
            (UiLibrary::PrimeVue, Framework::Vue3) => &[Package { name: "primevue", version: "^3.50.0" }],
            (ui, framework) => unreachable!(
                "UI library {} is not offered for {}",
                ui.id(),
                framework.id()
            ),
        };
        Some(Contribution::runtime(packages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::VersionReq;

    fn all_contributions() -> Vec<(&'static str, Contribution)> {
        let mut out = Vec::new();
        for v in ValidationLibrary::ALL {
            out.extend(v.packages().map(|c| (v.id(), c)));
        }
        for e in ErrorHandlingLibrary::ALL {
            out.extend(e.packages().map(|c| (e.id(), c)));
        }
        for fw in Framework::ALL {
            for rt in Runtime::ALL {
                for t in TestingLibrary::ALL {
                    out.extend(t.packages(*fw, *rt).map(|c| (t.id(), c)));
                }
            }
            for s in StateLibrary::options_for(*fw) {
                out.extend(s.packages(*fw).map(|c| (s.id(), c)));
            }
            for u in UiLibrary::options_for(*fw) {
                out.extend(u.packages(*fw).map(|c| (u.id(), c)));
            }
        }
        out
    }

    #[test]
    fn test_none_contributes_nothing() {
        assert!(ValidationLibrary::None.packages().is_none());
        assert!(ErrorHandlingLibrary::None.packages().is_none());
        for fw in Framework::ALL {
            assert!(TestingLibrary::None.packages(*fw, Runtime::Node).is_none());
            assert!(StateLibrary::None.packages(*fw).is_none());
            assert!(UiLibrary::None.packages(*fw).is_none());
        }
    }

    #[test]
    fn test_every_version_is_a_valid_range() {
        for (id, contribution) in all_contributions() {
            assert!(!contribution.packages.is_empty(), "{} contributes no packages", id);
            for package in contribution.packages {
                assert!(
                    VersionReq::parse(package.version).is_ok(),
                    "{} -> {}@{} is not a semver range",
                    id,
                    package.name,
                    package.version
                );
            }
        }
    }

    #[test]
    fn test_testing_goes_to_dev_dependencies() {
        for fw in Framework::ALL {
            for t in TestingLibrary::ALL {
                if let Some(c) = t.packages(*fw, Runtime::Bun) {
                    assert_eq!(c.section, Section::DevDependencies);
                }
            }
        }
        assert_eq!(
            ValidationLibrary::Zod.packages().unwrap().section,
            Section::Dependencies
        );
    }

    #[test]
    fn test_jest_brings_ts_node_for_its_config() {
        for fw in Framework::ALL {
            let jest = TestingLibrary::Jest.packages(*fw, Runtime::Node).unwrap();
            assert!(jest.packages.iter().any(|p| p.name == "ts-node"), "{}", fw.id());
        }
    }

    #[test]
    fn test_testing_library_on_fresh_is_preact() {
        let names = |runtime: Runtime| -> Vec<&'static str> {
            let c = TestingLibrary::ReactTestingLibrary.packages(Framework::React, runtime).unwrap();
            c.packages.iter().map(|p| p.name).collect()
        };
        assert!(names(Runtime::Deno).contains(&"@testing-library/preact"));
        assert!(!names(Runtime::Deno).contains(&"@testing-library/react"));
        assert!(names(Runtime::Node).contains(&"@testing-library/react"));
    }

    #[test]
    fn test_chakra_contributes_three_packages() {
        let chakra = UiLibrary::ChakraUi.packages(Framework::React).unwrap();
        let names: Vec<_> = chakra.packages.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["@chakra-ui/react", "@emotion/react", "@emotion/styled"]);
    }

    #[test]
    #[should_panic(expected = "not offered for vue3")]
    fn test_recoil_on_vue_is_unreachable() {
        StateLibrary::Recoil.packages(Framework::Vue3);
    }
}
