//! Table Builder: reads the raw survey tables, applies each table's cleaning
//! rule and writes CSV plus best-effort LaTeX.

pub mod rules;

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Config;
use crate::constants::{self, *};
use crate::error::{ArtifactError, Result};
use crate::table::{csv_io, latex, Table};
use rules::{EraYearSort, NumericSort, Passthrough, TableRule};

/// A named input table and the rule applied before it is saved.
pub struct TableSpec {
    pub name: &'static str,
    pub rule: Box<dyn TableRule>,
}

impl TableSpec {
    pub fn new(name: &'static str, rule: Box<dyn TableRule>) -> Self {
        Self { name, rule }
    }
}

/// Outcome of building one table.
#[derive(Debug, Clone)]
pub struct TableReport {
    pub name: String,
    pub rows: usize,
    pub csv_path: PathBuf,
    /// `None` when LaTeX is disabled or could not be written
    pub tex_path: Option<PathBuf>,
}

/// The seven survey tables in build order.
pub fn table_specs() -> Vec<TableSpec> {
    vec![
        TableSpec::new(TABLE1_MODEL_PERFORMANCE, Box::new(NumericSort::model_performance())),
        TableSpec::new(TABLE2_HARDWARE_SPEEDS, Box::new(NumericSort::hardware_speeds())),
        TableSpec::new(TABLE3_DATASETS, Box::new(NumericSort::datasets())),
        TableSpec::new(TABLE4_CHALLENGES, Box::new(Passthrough)),
        TableSpec::new(TABLE5_FUTURE_RESEARCH, Box::new(Passthrough)),
        TableSpec::new(TABLE6_IMPLEMENTATION_PHASES, Box::new(Passthrough)),
        TableSpec::new(TABLE7_EVOLUTION_TECHNOLOGIES, Box::new(EraYearSort)),
    ]
}

/// Build every table. The first failure stops the run.
pub fn build_all(config: &Config) -> Result<Vec<TableReport>> {
    fs::create_dir_all(&config.paths.tables_dir)?;
    table_specs().iter().map(|spec| build_table(spec, config)).collect()
}

/// Load, clean and persist one table.
pub fn build_table(spec: &TableSpec, config: &Config) -> Result<TableReport> {
    let span = tracing::info_span!("table", name = spec.name, rule = spec.rule.describe());
    let _enter = span.enter();

    let input = config.paths.raw_dir.join(constants::csv_file_name(spec.name));
    let mut table = csv_io::read_csv(&input)?;
    let rows_in = table.len();

    spec.rule.apply(&mut table)?;
    debug_assert_eq!(rows_in, table.len(), "cleaning rules never drop rows");

    save_table(&table, spec.name, config)
}

/// Write `<name>.csv`, then try `<name>.tex`. LaTeX failures are logged only.
pub fn save_table(table: &Table, name: &str, config: &Config) -> Result<TableReport> {
    let csv_path = config.paths.tables_dir.join(constants::csv_file_name(name));
    csv_io::write_csv(table, &csv_path)?;

    let tex_path = if config.latex.enabled {
        let tex_path = config.paths.tables_dir.join(constants::tex_file_name(name));
        let written = latex::render_latex(table, &config.latex.na_rep)
            .and_then(|tex| fs::write(&tex_path, tex).map_err(ArtifactError::from));
        match written {
            Ok(()) => Some(tex_path),
            Err(e) => {
                warn!("Could not write LaTeX for {}: {}", name, e);
                None
            }
        }
    } else {
        None
    };

    info!(rows = table.len(), "Saved {} -> {}", name, csv_path.display());
    Ok(TableReport { name: name.to_string(), rows: table.len(), csv_path, tex_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specs_cover_seven_tables_once() {
        let specs = table_specs();
        assert_eq!(specs.len(), 7);
        let mut names: Vec<_> = specs.iter().map(|s| s.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 7);
        assert!(!names.contains(&TABLE8_DETECTION_EVOLUTION));
    }

    #[test]
    fn test_passthrough_tables_have_no_rule() {
        let specs = table_specs();
        let unchanged: Vec<_> = specs
            .iter()
            .filter(|s| s.rule.describe() == "unchanged")
            .map(|s| s.name)
            .collect();
        assert_eq!(
            unchanged,
            vec![TABLE4_CHALLENGES, TABLE5_FUTURE_RESEARCH, TABLE6_IMPLEMENTATION_PHASES]
        );
    }

    #[test]
    fn test_every_table_rule_has_a_description() {
        for spec in table_specs() {
            assert!(!spec.rule.describe().is_empty(), "{} has no rule description", spec.name);
        }
        let era = table_specs().into_iter().find(|s| s.name == TABLE7_EVOLUTION_TECHNOLOGIES);
        assert_eq!(era.map(|s| s.rule.describe()), Some("sort by year extracted from era"));
    }
}
