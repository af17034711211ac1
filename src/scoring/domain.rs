use serde::{Deserialize, Serialize};

/// Weights of one domain must sum to 1.0 within this tolerance.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Whether a higher raw indicator value improves or worsens the score.
/// NEGATIVE indicators are inverted after normalization so that higher is
/// always better at weighting time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    #[default]
    Positive,
    Negative,
}

/// One weighted indicator inside a domain.
///
/// Example YAML:
/// ```yaml
/// indicator: tasa_paro
/// weight: 0.230195
/// polarity: negative
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IndicatorWeight {
    /// Column name in the indicator table.
    pub indicator: String,

    /// Non-negative AHP-derived weight.
    pub weight: f64,

    /// Defaults to positive when omitted.
    #[serde(default)]
    pub polarity: Polarity,
}

/// A life domain's scoring configuration: an ordered set of weighted
/// indicators. Immutable after definition; callers may supply recalibrated
/// sets through the config file without code changes.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DomainConfig {
    /// Domain key, e.g. "economia".
    pub name: String,

    pub indicators: Vec<IndicatorWeight>,
}

impl DomainConfig {
    /// Sum of all indicator weights. 1.0 within WEIGHT_TOLERANCE for a valid
    /// domain.
    pub fn weight_sum(&self) -> f64 {
        self.indicators.iter().map(|iw| iw.weight).sum()
    }

    /// Name of the score column this domain produces, e.g. "nota_economia".
    pub fn score_column(&self) -> String {
        format!("nota_{}", self.name)
    }

    /// Economy and employment.
    pub fn economia() -> Self {
        Self {
            name: "economia".to_string(),
            indicators: vec![
                iw("renta_media", 0.427594, Polarity::Positive),
                iw("tasa_paro", 0.230195, Polarity::Negative),
                iw("tasa_paro_larga_duracion", 0.162574, Polarity::Negative),
                iw("tasa_paro_joven", 0.102090, Polarity::Negative),
                iw("pension_media", 0.046948, Polarity::Positive),
                iw("tasa_comercios", 0.030599, Polarity::Positive),
            ],
        }
    }

    /// Education.
    pub fn educacion() -> Self {
        Self {
            name: "educacion".to_string(),
            indicators: vec![
                iw("tasa_sin_estudios", 0.312186, Polarity::Negative),
                iw("tasa_poblacion_educacion_superior", 0.233266, Polarity::Positive),
                iw("tasa_absentismo", 0.167700, Polarity::Negative),
                iw("tasa_centros_publicos_obligatoria", 0.103495, Polarity::Positive),
                iw("tasa_centros_ensenanza", 0.061458, Polarity::Positive),
                iw("tasa_bibliotecas", 0.050164, Polarity::Positive),
                iw("tasa_centros_culturales", 0.035483, Polarity::Positive),
                iw("satisfaccion_instalaciones_deportivas", 0.021196, Polarity::Positive),
                iw("satisfaccion_espacios_verdes", 0.015052, Polarity::Positive),
            ],
        }
    }

    /// Social services and safety.
    pub fn social() -> Self {
        Self {
            name: "social".to_string(),
            indicators: vec![
                iw("tasa_riesgo_pobreza_infantil", 0.301704, Polarity::Negative),
                iw("tasa_intervenciones_policia", 0.191723, Polarity::Negative),
                iw("tasa_demandas_cai", 0.141420, Polarity::Negative),
                iw("tasa_personas_atendidas_ss", 0.103539, Polarity::Negative),
                iw("tasa_ayuda_domicilio", 0.075159, Polarity::Positive),
                iw("calidad_vida", 0.057293, Polarity::Positive),
                iw("percepcion_seguridad", 0.040861, Polarity::Positive),
                iw("tasa_residencias", 0.032163, Polarity::Positive),
                iw("satisfaccion_vivir_distrito", 0.021747, Polarity::Positive),
                iw("tasa_centros_ss", 0.020210, Polarity::Positive),
                iw("amigable_lgbt", 0.014181, Polarity::Positive),
            ],
        }
    }

    /// Health.
    pub fn salud() -> Self {
        Self {
            name: "salud".to_string(),
            indicators: vec![
                iw("esperanza_vida", 0.379511, Polarity::Positive),
                iw("autopercepcion_salud_buena", 0.210312, Polarity::Positive),
                iw("tasa_centros_sanitarios", 0.144085, Polarity::Positive),
                iw("presencia_enfermedad_cronica", 0.103195, Polarity::Negative),
                iw("probabilidad_enfermedad_mental", 0.072054, Polarity::Negative),
                iw("consumo_de_medicamentos", 0.041516, Polarity::Negative),
                iw("sedentarismo", 0.026998, Polarity::Negative),
                iw("tasa_discapacitados", 0.022329, Polarity::Negative),
            ],
        }
    }

    /// Culture, sport and green space.
    pub fn cultura() -> Self {
        Self {
            name: "cultura".to_string(),
            indicators: vec![
                iw("tasa_centros_culturales", 0.318427, Polarity::Positive),
                iw("tasa_bibliotecas", 0.215309, Polarity::Positive),
                iw("tasa_centros_deportivos", 0.148276, Polarity::Positive),
                iw("superficie_deportiva_habitante", 0.104512, Polarity::Positive),
                iw("superficie_zonas_verdes", 0.077841, Polarity::Positive),
                iw("satisfaccion_centros_culturales", 0.056918, Polarity::Positive),
                iw("satisfaccion_espacios_verdes", 0.044206, Polarity::Positive),
                iw("satisfaccion_instalaciones_deportivas", 0.034511, Polarity::Positive),
            ],
        }
    }
}

fn iw(indicator: &str, weight: f64, polarity: Polarity) -> IndicatorWeight {
    IndicatorWeight {
        indicator: indicator.to_string(),
        weight,
        polarity,
    }
}

/// All built-in domains, in presentation order.
pub fn builtin_domains() -> Vec<DomainConfig> {
    vec![
        DomainConfig::economia(),
        DomainConfig::educacion(),
        DomainConfig::social(),
        DomainConfig::salud(),
        DomainConfig::cultura(),
    ]
}
