use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One normalized line of a Mercado Pago billing report.
///
/// Everything except `competencia` may be missing from the source report.
/// `competencia` is expected as "YYYY-MM"; the type does not check it, the
/// code that builds rows does (see [`crate::billing::parse_competencia`]).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BillingRow {
    #[serde(default)]
    pub numero_nfe: Option<String>,
    #[serde(default)]
    pub data_movimento: Option<NaiveDate>,
    #[serde(default)]
    pub numero_tarifa: Option<String>,
    #[serde(default)]
    pub numero_movimentacao: Option<String>,
    #[serde(default)]
    pub detalhe: Option<String>,
    #[serde(default)]
    pub cobrados_na_operacao: Option<String>,
    #[serde(default)]
    pub status_tarifa: Option<String>,
    #[serde(default)]
    pub tarifa_estornada: Option<bool>,
    #[serde(default)]
    pub valor_tarifa: Option<f64>,
    #[serde(default)]
    pub tipo_operacao: Option<String>,
    #[serde(default)]
    pub operacao_relacionada: Option<String>,
    #[serde(default)]
    pub nome_filial: Option<String>,
    #[serde(default)]
    pub referencia_externa: Option<String>,
    #[serde(default)]
    pub cliente: Option<String>,
    #[serde(default)]
    pub valor_acrescimo: Option<f64>,
    #[serde(default)]
    pub valor_total_acrescido: Option<f64>,
    #[serde(default)]
    pub valor_operacao: Option<f64>,
    #[serde(default)]
    pub secoes_ml_mp: Option<String>,
    pub competencia: String,
}

impl BillingRow {
    /// A row with only the period set; fill the rest with struct update syntax.
    pub fn new(competencia: impl Into<String>) -> Self {
        Self {
            numero_nfe: None,
            data_movimento: None,
            numero_tarifa: None,
            numero_movimentacao: None,
            detalhe: None,
            cobrados_na_operacao: None,
            status_tarifa: None,
            tarifa_estornada: None,
            valor_tarifa: None,
            tipo_operacao: None,
            operacao_relacionada: None,
            nome_filial: None,
            referencia_externa: None,
            cliente: None,
            valor_acrescimo: None,
            valor_total_acrescido: None,
            valor_operacao: None,
            secoes_ml_mp: None,
            competencia: competencia.into(),
        }
    }
}
