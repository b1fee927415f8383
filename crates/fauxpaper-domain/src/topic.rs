//! Topic module - content domains and their vocabulary banks
//!
//! A claim is classified into one of a fixed set of domains; each domain
//! carries the jargon, formula, unit and method vocabularies used to flavor
//! generated text and chart labels. Classification itself lives in the
//! engine; this module only owns the data.

/// Fixed set of content domains a claim can classify into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Molecules, enzymes, cells
    Biochemistry,

    /// Energy, forces, quanta
    Physics,

    /// Food, diet, calories
    Nutrition,

    /// People, behavior, feelings
    Psychology,

    /// Computers, software, data
    Technology,

    /// Money, markets, prices
    Economics,

    /// Fallback when no rule matches
    General,
}

impl Domain {
    /// Get the domain name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Biochemistry => "biochemistry",
            Domain::Physics => "physics",
            Domain::Nutrition => "nutrition",
            Domain::Psychology => "psychology",
            Domain::Technology => "technology",
            Domain::Economics => "economics",
            Domain::General => "general",
        }
    }

    /// Get the vocabulary profile for this domain
    pub fn profile(&self) -> TopicProfile {
        match self {
            Domain::Biochemistry => TopicProfile {
                domain: *self,
                jargon: &[
                    "molecular concentration",
                    "enzymatic activity",
                    "substrate binding",
                    "metabolic pathway",
                    "cellular uptake",
                    "bioavailability",
                ],
                formulas: &[
                    "C₆H₁₂O₆ (glucose)",
                    "ATP → ADP + Pi",
                    "ΔG = -RT ln K",
                    "pH = -log[H⁺]",
                ],
                units: &["mol/L", "μM", "kDa", "nm"],
                methods: &[
                    "spectrophotometry",
                    "chromatography",
                    "mass spectrometry",
                    "Western blot analysis",
                ],
            },
            Domain::Physics => TopicProfile {
                domain: *self,
                jargon: &[
                    "wave function",
                    "quantum superposition",
                    "electromagnetic field",
                    "kinetic energy",
                    "potential energy",
                ],
                formulas: &["E = mc²", "F = ma", "ΔE = hν", "p = mv", "λ = h/p"],
                units: &["J", "N", "eV", "m/s²", "Hz"],
                methods: &[
                    "interferometry",
                    "particle acceleration",
                    "spectral analysis",
                    "calorimetry",
                ],
            },
            Domain::Nutrition => TopicProfile {
                domain: *self,
                jargon: &[
                    "caloric intake",
                    "macronutrient balance",
                    "glycemic index",
                    "satiety response",
                    "dietary compliance",
                ],
                formulas: &["BMI = kg/m²", "TEE = BMR × PAL", "DRI = EAR + 2SD"],
                units: &["kcal", "g/serving", "mg/dL", "IU"],
                methods: &[
                    "food frequency questionnaire",
                    "dietary recall",
                    "metabolic assessment",
                    "anthropometric measurement",
                ],
            },
            Domain::Psychology => TopicProfile {
                domain: *self,
                jargon: &[
                    "cognitive load",
                    "behavioral pattern",
                    "psychometric assessment",
                    "self-efficacy",
                    "emotional regulation",
                ],
                formulas: &[
                    "d = (M₁ - M₂) / σ",
                    "r² = explained variance",
                    "α > 0.7 (reliability)",
                ],
                units: &["SD", "percentile", "z-score", "Likert scale"],
                methods: &[
                    "self-report inventory",
                    "behavioral observation",
                    "neuroimaging",
                    "longitudinal analysis",
                ],
            },
            Domain::Technology => TopicProfile {
                domain: *self,
                jargon: &[
                    "computational efficiency",
                    "algorithmic complexity",
                    "data throughput",
                    "system latency",
                    "API integration",
                ],
                formulas: &["O(n log n)", "T(n) = 2T(n/2) + n", "bandwidth = bits/second"],
                units: &["ms", "MB/s", "FLOPS", "requests/sec"],
                methods: &[
                    "A/B testing",
                    "benchmark analysis",
                    "user analytics",
                    "load testing",
                ],
            },
            Domain::Economics => TopicProfile {
                domain: *self,
                jargon: &[
                    "marginal utility",
                    "price elasticity",
                    "market equilibrium",
                    "opportunity cost",
                    "comparative advantage",
                ],
                formulas: &[
                    "ROI = (gain - cost) / cost",
                    "PV = FV / (1+r)ⁿ",
                    "GDP = C + I + G + NX",
                ],
                units: &["$", "% APR", "basis points", "PPP"],
                methods: &[
                    "econometric modeling",
                    "regression analysis",
                    "market survey",
                    "panel data analysis",
                ],
            },
            Domain::General => TopicProfile {
                domain: *self,
                jargon: &[
                    "statistical significance",
                    "effect size",
                    "confidence interval",
                    "correlation coefficient",
                ],
                formulas: &["p < 0.05", "r = 0.7", "CI = 95%"],
                units: &["%", "SD", "n"],
                methods: &[
                    "survey methodology",
                    "observational study",
                    "cross-sectional analysis",
                ],
            },
        }
    }
}

/// Vocabulary bank attached to a classified domain
///
/// Feeds the template assembler's prompts and the chart builder's label
/// tables. The slices are static program data, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicProfile {
    /// The classified domain
    pub domain: Domain,

    /// Domain jargon phrases
    pub jargon: &'static [&'static str],

    /// Formulas and notation
    pub formulas: &'static [&'static str],

    /// Measurement units
    pub units: &'static [&'static str],

    /// Method names
    pub methods: &'static [&'static str],
}
