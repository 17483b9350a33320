use std::path::PathBuf;
use std::process;

use clap::Parser;

use glowcam_core::annotation::domain::object_annotator::ObjectAnnotator;
use glowcam_core::annotation::infrastructure::onnx_yolo_annotator::OnnxYoloAnnotator;
use glowcam_core::detection::domain::face_mesh_detector::FaceMeshDetector;
use glowcam_core::detection::infrastructure::model_resolver;
use glowcam_core::detection::infrastructure::null_face_mesh_detector::NullFaceMeshDetector;
use glowcam_core::detection::infrastructure::onnx_face_mesh_detector::OnnxFaceMeshDetector;
use glowcam_core::enhance::face_region_enhancer::FaceRegionEnhancer;
use glowcam_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use glowcam_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use glowcam_core::pipeline::filter_pipeline::FilterPipeline;
use glowcam_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use glowcam_core::pipeline::process_image_use_case::ProcessImageUseCase;
use glowcam_core::shared::constants::{
    DEFAULT_DETECTION_CONFIDENCE, FACE_MESH_MODEL_NAME, FACE_MESH_MODEL_URL, IMAGE_EXTENSIONS,
    YOLO_MODEL_NAME, YOLO_MODEL_URL,
};
use glowcam_core::shared::toggles::{FilterToggles, RenderMode};

/// Image filtering and face enhancement for still images.
#[derive(Parser)]
#[command(name = "glowcam")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// Collapse the image to grayscale.
    #[arg(long)]
    grayscale: bool,

    /// Apply Gaussian smoothing.
    #[arg(long)]
    blur: bool,

    /// Apply Canny edge detection.
    #[arg(long)]
    edges: bool,

    /// Brighten the detected face region.
    #[arg(long)]
    beautify: bool,

    /// Render mode: original or object.
    #[arg(long, default_value = "original")]
    mode: String,

    /// Object detection confidence threshold (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_DETECTION_CONFIDENCE)]
    confidence: f64,

    /// Face-presence score threshold for the beautify stage (0.0-1.0).
    #[arg(long, default_value = "0.5")]
    face_score: f64,

    /// Directory with pre-downloaded ONNX models (skips the download).
    #[arg(long)]
    models_dir: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let toggles = FilterToggles {
        grayscale: cli.grayscale,
        blur: cli.blur,
        edges: cli.edges,
        beautify: cli.beautify,
    };
    let mode = parse_mode(&cli.mode)?;

    let detector: Box<dyn FaceMeshDetector> = if toggles.beautify {
        let path = model_resolver::resolve(
            FACE_MESH_MODEL_NAME,
            FACE_MESH_MODEL_URL,
            cli.models_dir.as_deref(),
            Some(download_progress()),
        )?;
        Box::new(OnnxFaceMeshDetector::new(&path, cli.face_score)?)
    } else {
        Box::new(NullFaceMeshDetector)
    };

    let annotator: Option<Box<dyn ObjectAnnotator>> = if mode == RenderMode::ObjectDetection {
        let path = model_resolver::resolve(
            YOLO_MODEL_NAME,
            YOLO_MODEL_URL,
            cli.models_dir.as_deref(),
            Some(download_progress()),
        )?;
        Some(Box::new(OnnxYoloAnnotator::new(&path, cli.confidence)?))
    } else {
        None
    };

    let pipeline = FilterPipeline::new(FaceRegionEnhancer::new(detector));
    let mut use_case = ProcessImageUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        pipeline,
        annotator,
        Box::new(StdoutPipelineLogger::default()),
    );

    use_case.execute(&cli.input, &cli.output, toggles, mode)?;
    log::info!("Wrote {}", cli.output.display());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("input file not found: {}", cli.input.display()).into());
    }
    let supported = cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false);
    if !supported {
        return Err(format!(
            "unsupported input format (expected one of: {})",
            IMAGE_EXTENSIONS.join(", ")
        )
        .into());
    }
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err("confidence must be between 0.0 and 1.0".into());
    }
    if !(0.0..=1.0).contains(&cli.face_score) {
        return Err("face-score must be between 0.0 and 1.0".into());
    }
    Ok(())
}

fn parse_mode(mode: &str) -> Result<RenderMode, Box<dyn std::error::Error>> {
    match mode {
        "original" => Ok(RenderMode::Original),
        "object" => Ok(RenderMode::ObjectDetection),
        other => Err(format!("unknown mode '{other}' (expected: original, object)").into()),
    }
}

fn download_progress() -> model_resolver::ProgressFn {
    Box::new(|downloaded, total| {
        if total > 0 {
            let pct = downloaded as f64 / total as f64 * 100.0;
            log::info!("Downloading model: {pct:.0}%");
        }
    })
}
