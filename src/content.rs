use log::error;
use serde::Deserialize;

use crate::components::icons::IconKind;
use crate::prefs::Language;

static RAW_COPY: &str = include_str!("../content/copy.json");

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct NavContent {
    pub home: String,
    pub solution: String,
    pub contact: String,
    #[serde(rename = "langToggle")]
    pub lang_toggle: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub cta2: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub struct IconCard {
    pub icon: IconKind,
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PainContent {
    pub title: String,
    pub cards: Vec<IconCard>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct SolutionContent {
    pub title: String,
    pub cards: Vec<IconCard>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub struct StepContent {
    pub num: u8,
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct StepsContent {
    pub title: String,
    pub steps: Vec<StepContent>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FinalCtaContent {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FooterContent {
    pub copyright: String,
}

/// All page copy for one language.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Content {
    pub nav: NavContent,
    pub hero: HeroContent,
    pub pain: PainContent,
    pub solution: SolutionContent,
    pub steps: StepsContent,
    #[serde(rename = "finalCTA")]
    pub final_cta: FinalCtaContent,
    pub footer: FooterContent,
}

/// The embedded bilingual copy bundle, parsed and validated once at startup.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ContentBundle {
    pub ar: Content,
    pub en: Content,
}

impl ContentBundle {
    pub fn load() -> Result<ContentBundle, serde_json::Error> {
        serde_json::from_str(RAW_COPY)
    }

    /// A bundle that fails to parse must not take the page down with it;
    /// render the empty skeleton instead.
    pub fn load_or_default() -> ContentBundle {
        ContentBundle::load().unwrap_or_else(|err| {
            error!("embedded copy bundle is invalid: {}", err);
            ContentBundle::default()
        })
    }

    pub fn for_language(&self, language: Language) -> &Content {
        match language {
            Language::Arabic => &self.ar,
            Language::English => &self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bundle_parses() {
        ContentBundle::load().expect("copy.json must match the content schema");
    }

    #[test]
    fn both_languages_carry_the_full_section_set() {
        let bundle = ContentBundle::load().unwrap();
        for content in [&bundle.ar, &bundle.en] {
            assert!(!content.nav.home.is_empty());
            assert!(!content.hero.title.is_empty());
            assert!(!content.final_cta.cta.is_empty());
            assert!(!content.footer.copyright.is_empty());
            assert_eq!(content.pain.cards.len(), 4);
            assert_eq!(content.solution.cards.len(), 3);
            assert!(!content.steps.steps.is_empty());
        }
    }

    #[test]
    fn steps_are_numbered_sequentially_from_one() {
        let bundle = ContentBundle::load().unwrap();
        for content in [&bundle.ar, &bundle.en] {
            for (idx, step) in content.steps.steps.iter().enumerate() {
                assert_eq!(step.num as usize, idx + 1);
            }
        }
    }

    #[test]
    fn language_toggle_labels_point_at_the_other_language() {
        let bundle = ContentBundle::load().unwrap();
        assert_ne!(bundle.ar.nav.lang_toggle, bundle.en.nav.lang_toggle);
    }

    #[test]
    fn for_language_selects_the_matching_copy() {
        let bundle = ContentBundle::load().unwrap();
        assert_eq!(bundle.for_language(Language::Arabic), &bundle.ar);
        assert_eq!(bundle.for_language(Language::English), &bundle.en);
    }
}
