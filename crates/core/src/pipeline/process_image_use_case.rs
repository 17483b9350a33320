use std::path::Path;
use std::time::Instant;

use crate::annotation::domain::object_annotator::ObjectAnnotator;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::filter_pipeline::FilterPipeline;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::toggles::{FilterToggles, RenderMode};

/// Single-image pipeline: read → filter → (annotate) → write.
///
/// The annotator is optional; `RenderMode::ObjectDetection` without one is
/// a wiring error reported to the caller.
pub struct ProcessImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    pipeline: FilterPipeline,
    annotator: Option<Box<dyn ObjectAnnotator>>,
    logger: Box<dyn PipelineLogger>,
}

impl ProcessImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        pipeline: FilterPipeline,
        annotator: Option<Box<dyn ObjectAnnotator>>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            writer,
            pipeline,
            annotator,
            logger,
        }
    }

    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
        toggles: FilterToggles,
        mode: RenderMode,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let start = Instant::now();
        let frame = self.reader.read(input_path)?;
        self.logger
            .timing("read", start.elapsed().as_secs_f64() * 1000.0);

        let start = Instant::now();
        let mut processed = self.pipeline.process(&frame, toggles)?;
        self.logger
            .timing("filter", start.elapsed().as_secs_f64() * 1000.0);

        if mode == RenderMode::ObjectDetection {
            let annotator = self
                .annotator
                .as_mut()
                .ok_or("object detection mode requires an annotator")?;
            let start = Instant::now();
            processed = annotator.annotate(&processed)?;
            self.logger
                .timing("annotate", start.elapsed().as_secs_f64() * 1000.0);
        }

        let start = Instant::now();
        self.writer.write(output_path, &processed)?;
        self.logger
            .timing("write", start.elapsed().as_secs_f64() * 1000.0);

        self.logger.progress(1, 1);
        self.logger.summary();
        Ok(())
    }
}
