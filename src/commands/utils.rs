use crate::aggregator::group_records;
use crate::output::read_consolidated;
use crate::utils::config::{CONSOLIDATED_COLUMNS, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a consolidated table by reading it back
pub fn validate_table_file(file_path: impl AsRef<Path>) -> Result<usize> {
    let file_path = file_path.as_ref();
    println!("Validating consolidated table: {}", file_path.display());

    let records = read_consolidated(file_path)
        .with_context(|| format!("Invalid consolidated table {}", file_path.display()))?;
    let groups = group_records(&records);

    println!("✓ Valid consolidated table");
    println!("  Records: {}", records.len());
    println!("  Groups (protocol, mobility): {}", groups.len());
    for (key, members) in &groups {
        println!("    {} / {}: {}", key.protocol, key.mobility, members.len());
    }

    Ok(records.len())
}

/// Display consolidated table layout
pub fn display_schema(show_details: bool) {
    println!("Netsim Report Table Schema");
    println!("Report Schema Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Consolidated table columns:");
        println!("  Clientes: integer            - Number of simulated clients");
        println!("  Protocolo: string            - Transport mode (TCP, UDP, MIXED)");
        println!("  Mobilidade: string           - Sim (mobile) or Nao (static)");
        println!("  TaxaPerda: number            - Packet loss (%)");
        println!("  AtrasoMedio: number          - Mean delay (ms)");
        println!("  Vazao: number                - Throughput (Mbps)");
        println!("  PacotesTransmitidos: integer - Packets sent");
        println!("  PacotesRecebidos: integer    - Packets received");
        println!("  PacotesPerdidos: integer     - Packets lost");
        println!();
        println!("Statistics table: Protocolo, Mobilidade, then <metric>_<stat>");
        println!("  metrics: Vazao, AtrasoMedio, TaxaPerda");
        println!("  stats:   mean, std, min, max (std empty for single-sample groups)");
    } else {
        println!("Columns: {}", CONSOLIDATED_COLUMNS.join(","));
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Netsim Report v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Consolidates network simulation result files into tables and charts.");
}
