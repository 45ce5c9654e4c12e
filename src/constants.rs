/// Input/output base names shared by the table and figure pipelines.
/// Each table is read from `<raw_dir>/<name>.csv` and written under the
/// same base name to the tables directory.

pub const TABLE1_MODEL_PERFORMANCE: &str = "table1_model_performance";
pub const TABLE2_HARDWARE_SPEEDS: &str = "table2_hardware_speeds";
pub const TABLE3_DATASETS: &str = "table3_datasets";
pub const TABLE4_CHALLENGES: &str = "table4_challenges";
pub const TABLE5_FUTURE_RESEARCH: &str = "table5_future_research";
pub const TABLE6_IMPLEMENTATION_PHASES: &str = "table6_implementation_phases";
pub const TABLE7_EVOLUTION_TECHNOLOGIES: &str = "table7_evolution_technologies";
pub const TABLE8_DETECTION_EVOLUTION: &str = "table8_detection_evolution";

// Figure file names
pub const FIGURE1_ACCURACY_VS_COST: &str = "figure1_accuracy_vs_cost.png";
pub const FIGURE2_TIMELINE_EVOLUTION: &str = "figure2_timeline_evolution.png";
pub const FIGURE3_DATASET_COMPARISON: &str = "figure3_dataset_comparison.png";

// Column names referenced by the cleaning rules and figures
pub const COL_MODEL: &str = "Model";
pub const COL_ACCURACY: &str = "Accuracy (%)";
pub const COL_FLOPS: &str = "FLOPs";
pub const COL_DATASET: &str = "Dataset";
pub const COL_HARDWARE: &str = "Hardware";
pub const COL_INFERENCE_SPEED: &str = "Inference Speed (img/s)";
pub const COL_YEAR: &str = "Year";
pub const COL_TOTAL_SAMPLES: &str = "Total Samples";
pub const COL_CLASSES: &str = "Classes";
pub const COL_ERA: &str = "Era";

/// Helper column holding the year extracted from `Era`; never persisted.
pub const COL_ERA_NUMERIC: &str = "era_numeric";

pub const COL_EVO_YEAR: &str = "year";
pub const COL_EVO_ACCURACY: &str = "accuracy_pct";
pub const COL_EVO_DEFECT_SIZE: &str = "defect_size_nm";
pub const COL_EVO_CATEGORY: &str = "category";
pub const COL_EVO_LABEL: &str = "label";

/// File name of the CSV input for a table base name.
pub fn csv_file_name(name: &str) -> String {
    format!("{}.csv", name)
}

/// File name of the LaTeX output for a table base name.
pub fn tex_file_name(name: &str) -> String {
    format!("{}.tex", name)
}
