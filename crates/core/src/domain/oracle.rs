use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleTopic {
    Grading,
    Market,
    Portfolio,
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleAnswer {
    pub question: String,
    pub answer: String,
    pub topic: OracleTopic,
    pub confidence: f64,
}
