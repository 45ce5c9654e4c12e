#![allow(dead_code)]

use std::fs;
use std::path::Path;

use wdd_artifacts::Config;

pub const TABLE1: &str = "Model,Accuracy (%),FLOPs,Dataset,Year\n\
ResNet-50,97.5,4.1B,WM-811K,2019\n\
MobileNetV2,95.2,300M,WM-811K,2020\n\
ViT-B/16,98.9,17.6G,MixedWM38,2021\n\
CustomCNN,n/a,unknown,WM-811K,2018\n\
EfficientNet-B0,99.1,390M,MixedWM38,2021\n\
DenseNet-121,96.4,2.9B,WM-811K,2019\n";

pub const TABLE2: &str = "Hardware,Model,Inference Speed (img/s),Batch Size\n\
NVIDIA A100,ResNet-50,2800,64\n\
Jetson Nano,MobileNetV2,45,1\n\
NVIDIA A100,ViT-B/16,950,64\n\
Intel Xeon,ResNet-50,\"not measured\",8\n\
Jetson Nano,ResNet-50,12.5,1\n";

pub const TABLE3: &str = "Dataset,Year,Total Samples,Classes,Source,Data Type,Resolution,Label Type,Class Balance\n\
MixedWM38,2020,\"38,015\",38,Fab,Wafer map,52x52,Multi-label,Balanced\n\
WM-811K,2014,\"811,457\",9,TSMC,Wafer map,Variable,Single,Imbalanced\n\
Private SEM,TBD,undisclosed,5,Internal,SEM image,1024x1024,Single,Unknown\n\
DeepPCB,2019,\"1,500\",6,Academic,Image,640x640,Box,Balanced\n";

pub const TABLE4: &str = "Challenge,Description,Impact\n\
Class imbalance,\"Rare defect types, few samples\",High\n\
Label noise,Manual annotation errors,Medium\n";

pub const TABLE5: &str = "Direction,Rationale\n\
Self-supervised learning,Reduce labeling cost\n\
Edge deployment,In-line inspection at <10 ms\n";

pub const TABLE6: &str = "Phase,Duration,Deliverable\n\
1,3 months,Data pipeline\n\
2,6 months,Model training & validation\n";

pub const TABLE7: &str = "Era,Technology,Key Capability\n\
2012-2017: Deep Learning,CNN,Automatic features\n\
Future,Foundation models,Few-shot transfer\n\
1990s,Rule-based vision,Template matching\n\
2018-present,Transformers,Global context\n\
Pre-1980,Manual microscopy,Human inspection\n";

pub const TABLE8: &str = "year,accuracy_pct,defect_size_nm,category,label\n\
2018,96.0,22,Advanced DL,ResNet\n\
1975,55,5000,Manual,Microscope\n\
2022,98.8,5,Transformers,ViT\n\
1990,70,1000,Optical,Brightfield\n\
2024,99.3,3,Modern AI,Foundation\n\
2010,85,45,Quantum,Experimental\n";

/// Write every raw table into `raw_dir`.
pub fn write_fixtures(raw_dir: &Path) {
    fs::create_dir_all(raw_dir).unwrap();
    for (name, content) in [
        ("table1_model_performance", TABLE1),
        ("table2_hardware_speeds", TABLE2),
        ("table3_datasets", TABLE3),
        ("table4_challenges", TABLE4),
        ("table5_future_research", TABLE5),
        ("table6_implementation_phases", TABLE6),
        ("table7_evolution_technologies", TABLE7),
        ("table8_detection_evolution", TABLE8),
    ] {
        fs::write(raw_dir.join(format!("{}.csv", name)), content).unwrap();
    }
}

/// Default configuration rooted in a scratch directory, with fixtures in place.
pub fn scratch_config(root: &Path) -> Config {
    let raw_dir = root.join("data").join("raw");
    write_fixtures(&raw_dir);
    Config::default().with_raw_dir(&raw_dir).with_output_root(&root.join("output"))
}

/// Data rows (header excluded) of a CSV text.
pub fn data_lines(text: &str) -> Vec<String> {
    text.lines().skip(1).map(str::to_string).collect()
}
