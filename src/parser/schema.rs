//! Record definitions for result files and the consolidated table.
//!
//! `RawRecord` is what a result file says, field by field, before any
//! coercion. `ExperimentRecord` is the typed row written to the
//! consolidated CSV; its serde names are the table's column headers.

use serde::{Deserialize, Serialize};

/// One normalized experiment result, derived from exactly one input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Number of simulated clients
    #[serde(rename = "Clientes")]
    pub client_count: u64,

    /// Transport mode label (TCP, UDP, MIXED, or anything else the simulator wrote)
    #[serde(rename = "Protocolo")]
    pub protocol: String,

    /// "Sim" when clients moved during the experiment, "Nao" otherwise
    #[serde(rename = "Mobilidade")]
    pub mobility: String,

    /// Packet loss percentage
    #[serde(rename = "TaxaPerda")]
    pub loss_rate: f64,

    #[serde(rename = "AtrasoMedio")]
    pub avg_delay_ms: f64,

    #[serde(rename = "Vazao")]
    pub throughput_mbps: f64,

    #[serde(rename = "PacotesTransmitidos")]
    pub packets_sent: u64,

    #[serde(rename = "PacotesRecebidos")]
    pub packets_received: u64,

    #[serde(rename = "PacotesPerdidos")]
    pub packets_lost: u64,
}

/// Raw values of a result file, one slot per recognized key.
///
/// A `None` slot means the key never appeared. Values are kept verbatim
/// so the normalizer owns every default and coercion decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub clients: Option<String>,
    pub protocol: Option<String>,
    pub mobility: Option<String>,
    pub loss_rate: Option<String>,
    pub avg_delay: Option<String>,
    pub throughput: Option<String>,
    pub packets_sent: Option<String>,
    pub packets_received: Option<String>,
    pub packets_lost: Option<String>,

    /// Keys present in the file that the report does not use (e.g. `TempoSim`)
    pub unrecognized_keys: usize,
}

impl RawRecord {
    /// Number of recognized keys that were present in the file
    pub fn recognized_keys(&self) -> usize {
        [
            &self.clients,
            &self.protocol,
            &self.mobility,
            &self.loss_rate,
            &self.avg_delay,
            &self.throughput,
            &self.packets_sent,
            &self.packets_received,
            &self.packets_lost,
        ]
        .iter()
        .filter(|slot| slot.is_some())
        .count()
    }

    /// True when the file held no `key,value` line at all
    pub fn is_blank(&self) -> bool {
        self.recognized_keys() == 0 && self.unrecognized_keys == 0
    }
}
