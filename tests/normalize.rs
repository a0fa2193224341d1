use txtnorm::{LengthBounds, NormalizerConfig, RuleSet, TextNormalizer};

struct Case {
    name: &'static str,
    input: &'static str,
    config: NormalizerConfig,
    rules: &'static [(&'static str, &'static str)],
    expected: &'static str,
}

fn off() -> NormalizerConfig {
    NormalizerConfig {
        lowercase: false,
        remove_punctuation: false,
        remove_digits: false,
        length_bounds: None,
        verbose: false,
    }
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "default_config_mixed",
            input: "Hello, World! 123",
            config: NormalizerConfig::default(),
            rules: &[],
            expected: "hello world",
        },
        Case {
            name: "lowercase_only",
            input: "MiXeD CaSe",
            config: NormalizerConfig {
                lowercase: true,
                ..off()
            },
            rules: &[],
            expected: "mixed case",
        },
        Case {
            name: "digit_runs_split_tokens",
            input: "ab12cd 2024 x9y",
            config: NormalizerConfig {
                remove_digits: true,
                ..off()
            },
            rules: &[],
            expected: "abcd  xy",
        },
        Case {
            name: "non_ascii_runs_collapse_unconditionally",
            input: "naïve → résumé",
            config: off(),
            rules: &[],
            expected: "na ve   r sum",
        },
        Case {
            name: "punctuation_filter_keeps_spacing",
            input: "well-known (fact): yes!",
            config: NormalizerConfig {
                remove_punctuation: true,
                ..off()
            },
            rules: &[],
            expected: "wellknown fact yes",
        },
        Case {
            name: "length_bounds_discard_original_spacing",
            input: "a   bb\tccc   dddd\neeeee",
            config: NormalizerConfig {
                length_bounds: Some(LengthBounds { min: 2, max: 5 }),
                ..off()
            },
            rules: &[],
            expected: "ccc dddd",
        },
        Case {
            name: "rules_see_lowercased_text",
            input: "FOO bar",
            config: NormalizerConfig {
                lowercase: true,
                ..off()
            },
            rules: &[("foo", "baz")],
            expected: "baz bar",
        },
        Case {
            name: "rule_output_feeds_digit_removal",
            input: "foo123",
            config: NormalizerConfig {
                remove_digits: true,
                ..off()
            },
            rules: &[("foo", "bar")],
            expected: "bar",
        },
        Case {
            name: "whole_pipeline_combined",
            input: "  Send 3 Émails to Bob's Teammates today!!  ",
            config: NormalizerConfig {
                lowercase: true,
                remove_punctuation: true,
                remove_digits: true,
                length_bounds: Some(LengthBounds { min: 2, max: 9 }),
                verbose: false,
            },
            rules: &[("teammates", "crew")],
            expected: "send mails bobs crew today",
        },
        Case {
            name: "whitespace_only_input_trims_to_empty",
            input: " \t\n ",
            config: NormalizerConfig::default(),
            rules: &[],
            expected: "",
        },
    ];

    for case in cases {
        let mut normalizer =
            TextNormalizer::new(case.config.clone()).unwrap_or_else(|e| panic!("{}: {e}", case.name));
        if !case.rules.is_empty() {
            normalizer.set_rules(case.rules.iter().map(|(p, r)| (p.to_string(), r.to_string())).collect());
        }
        let out = normalizer
            .transform(case.input)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));
        assert_eq!(out, case.expected, "output mismatch for {}", case.name);
    }
}

#[test]
fn later_rules_rewrite_earlier_rule_output() {
    let mut normalizer = TextNormalizer::new(NormalizerConfig {
        lowercase: false,
        remove_punctuation: false,
        remove_digits: false,
        length_bounds: None,
        verbose: false,
    })
    .expect("config");

    let mut rules = RuleSet::new();
    rules.insert(r"\bred\b", "blue");
    rules.insert(r"\bblue\b", "green");
    normalizer.set_rules(rules);

    // "red" is rewritten twice; an original "blue" only once.
    assert_eq!(
        normalizer.transform("red and blue").expect("transform"),
        "green and green"
    );
}

#[test]
fn verbose_construction_is_diagnostic_only() {
    let quiet = TextNormalizer::new(NormalizerConfig::default()).expect("config");
    let loud = TextNormalizer::new(NormalizerConfig {
        verbose: true,
        ..NormalizerConfig::default()
    })
    .expect("config");

    let input = "Same INPUT, same 2 results!";
    assert_eq!(
        quiet.transform(input).expect("transform"),
        loud.transform(input).expect("transform")
    );
}
