//! Bucket labels

use crate::error::{ConfigError, ConfigResult};
use crate::template::{MessageTemplate, NumberFormat};
use crate::{Bucket, Thresholds};

const EN_SATISFIED: &str = "Requests having \nresponse time <= {0}ms";
const EN_TOLERATED: &str = "Requests having \nresponse time > {0}ms and <= {1}ms";
const EN_UNTOLERATED: &str = "Requests having \nresponse time > {0}ms";
const EN_FAILED: &str = "Requests in error";

const FR_SATISFIED: &str = "Requêtes ayant un \ntemps de réponse <= {0}ms";
const FR_TOLERATED: &str = "Requêtes ayant un \ntemps de réponse > {0}ms et <= {1}ms";
const FR_UNTOLERATED: &str = "Requêtes ayant un \ntemps de réponse > {0}ms";
const FR_FAILED: &str = "Requêtes en erreur";

/// Resolved label templates for the four buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTemplates {
    satisfied: MessageTemplate,
    tolerated: MessageTemplate,
    untolerated: MessageTemplate,
    failed: String,
    number_format: NumberFormat,
}

impl LabelTemplates {
    /// Build from raw patterns
    ///
    /// The failed label takes no arguments and is used verbatim.
    pub fn new(
        satisfied: &str,
        tolerated: &str,
        untolerated: &str,
        failed: &str,
        number_format: NumberFormat,
    ) -> ConfigResult<Self> {
        fn parse(name: &'static str, pattern: &str) -> ConfigResult<MessageTemplate> {
            MessageTemplate::parse(pattern).map_err(|source| ConfigError::Template { name, source })
        }

        Ok(Self {
            satisfied: parse("satisfied", satisfied)?,
            tolerated: parse("tolerated", tolerated)?,
            untolerated: parse("untolerated", untolerated)?,
            failed: failed.to_string(),
            number_format,
        })
    }

    /// English bundle
    pub fn english() -> Self {
        Self::builtin(
            EN_SATISFIED,
            EN_TOLERATED,
            EN_UNTOLERATED,
            EN_FAILED,
            NumberFormat::grouped(','),
        )
    }

    /// French bundle
    pub fn french() -> Self {
        Self::builtin(
            FR_SATISFIED,
            FR_TOLERATED,
            FR_UNTOLERATED,
            FR_FAILED,
            NumberFormat::grouped('\u{a0}'),
        )
    }

    /// Built-in bundle for a locale tag (`en`, `en-US`, `fr_FR`, ...)
    pub fn for_locale(locale: &str) -> ConfigResult<Self> {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" | "" => Ok(Self::english()),
            "fr" => Ok(Self::french()),
            _ => Err(ConfigError::UnknownLocale(locale.to_string())),
        }
    }

    fn builtin(
        satisfied: &str,
        tolerated: &str,
        untolerated: &str,
        failed: &str,
        number_format: NumberFormat,
    ) -> Self {
        Self::new(satisfied, tolerated, untolerated, failed, number_format)
            .expect("built-in label templates are well formed")
    }

    /// Number format applied to threshold arguments
    pub fn number_format(&self) -> NumberFormat {
        self.number_format
    }
}

impl Default for LabelTemplates {
    fn default() -> Self {
        Self::english()
    }
}

/// Formats bucket labels from resolved templates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFormatter {
    templates: LabelTemplates,
}

impl LabelFormatter {
    /// Create a formatter
    pub fn new(templates: LabelTemplates) -> Self {
        Self { templates }
    }

    /// Templates in use
    pub fn templates(&self) -> &LabelTemplates {
        &self.templates
    }

    /// Label for a bucket under the given thresholds
    pub fn label(&self, bucket: Bucket, satisfied: i64, tolerated: i64) -> String {
        let t = &self.templates;
        match bucket {
            Bucket::Satisfied => t.satisfied.format(&[satisfied], &t.number_format),
            Bucket::Tolerated => t.tolerated.format(&[satisfied, tolerated], &t.number_format),
            Bucket::Untolerated => t.untolerated.format(&[tolerated], &t.number_format),
            Bucket::Failed => t.failed.clone(),
        }
    }

    /// Label for a bucket under a threshold pair
    pub fn label_for(&self, bucket: Bucket, thresholds: Thresholds) -> String {
        self.label(bucket, thresholds.satisfied, thresholds.tolerated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_labels() {
        let f = LabelFormatter::default();
        assert_eq!(
            f.label(Bucket::Satisfied, 100, 500),
            "Requests having \nresponse time <= 100ms"
        );
        assert_eq!(
            f.label(Bucket::Tolerated, 100, 500),
            "Requests having \nresponse time > 100ms and <= 500ms"
        );
        assert_eq!(
            f.label(Bucket::Untolerated, 100, 500),
            "Requests having \nresponse time > 500ms"
        );
        assert_eq!(f.label(Bucket::Failed, 100, 500), "Requests in error");
    }

    #[test]
    fn test_grouped_thresholds() {
        let f = LabelFormatter::default();
        assert_eq!(
            f.label(Bucket::Tolerated, 500, 1500),
            "Requests having \nresponse time > 500ms and <= 1,500ms"
        );
    }

    #[test]
    fn test_french_labels() {
        let f = LabelFormatter::new(LabelTemplates::for_locale("fr_FR").unwrap());
        assert_eq!(
            f.label(Bucket::Untolerated, 500, 1500),
            "Requêtes ayant un \ntemps de réponse > 1\u{a0}500ms"
        );
        assert_eq!(f.label(Bucket::Failed, 500, 1500), "Requêtes en erreur");
    }

    #[test]
    fn test_locale_lookup() {
        assert_eq!(LabelTemplates::for_locale("en-US").unwrap(), LabelTemplates::english());
        assert_eq!(LabelTemplates::for_locale("").unwrap(), LabelTemplates::english());
        assert!(matches!(
            LabelTemplates::for_locale("de"),
            Err(ConfigError::UnknownLocale(l)) if l == "de"
        ));
    }

    #[test]
    fn test_injected_templates() {
        let templates = LabelTemplates::new(
            "fast<={0}",
            "ok({0},{1}]",
            "slow>{0}",
            "error",
            NumberFormat::plain(),
        )
        .unwrap();
        let f = LabelFormatter::new(templates);
        let thresholds = Thresholds::new(1000, 3000);
        assert_eq!(f.label_for(Bucket::Satisfied, thresholds), "fast<=1000");
        assert_eq!(f.label_for(Bucket::Tolerated, thresholds), "ok(1000,3000]");
        assert_eq!(f.label_for(Bucket::Untolerated, thresholds), "slow>3000");
        assert_eq!(f.label_for(Bucket::Failed, thresholds), "error");
    }

    #[test]
    fn test_failed_label_is_verbatim() {
        let templates =
            LabelTemplates::new("{0}", "{0}{1}", "{0}", "failed {0}", NumberFormat::plain())
                .unwrap();
        let f = LabelFormatter::new(templates);
        assert_eq!(f.label(Bucket::Failed, 1, 2), "failed {0}");
    }

    #[test]
    fn test_bad_template_rejected() {
        let err = LabelTemplates::new("{0", "{0}{1}", "{0}", "x", NumberFormat::plain())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Template { name: "satisfied", .. }));
    }

    #[test]
    fn test_repeated_calls_stable() {
        let f = LabelFormatter::default();
        let first = f.label(Bucket::Tolerated, 100, 500);
        for _ in 0..10 {
            assert_eq!(f.label(Bucket::Tolerated, 100, 500), first);
        }
    }
}
