//! Frame runner.

use anyhow::{bail, Context, Result};
use placement::config::PressureConfig;
use placement::harvest::{add_contour_path, add_extrema_candidates, GridProjection};
use placement::{find_extrema, LabelLocator, LocatorSet};
use tracing::{debug, info};

use crate::frames::{flatten_labels, flatten_markers, Candidate, Frame, FrameFile, FrameResult};

/// Run every frame of an animation through the locator set.
pub fn run_frames(
    set: &mut LocatorSet,
    file: &FrameFile,
    pressure: &PressureConfig,
) -> Result<Vec<FrameResult>> {
    let mut results = Vec::with_capacity(file.frames.len());
    for (index, frame) in file.frames.iter().enumerate() {
        let result = run_frame(set, file.width, file.height, index, frame, pressure)
            .with_context(|| format!("Frame {} failed", index))?;
        results.push(result);
    }

    info!(frames = results.len(), "Placed labels for all frames");
    Ok(results)
}

/// Register the candidates of one frame and choose the accepted positions.
pub fn run_frame(
    set: &mut LocatorSet,
    width: u32,
    height: u32,
    index: usize,
    frame: &Frame,
    pressure: &PressureConfig,
) -> Result<FrameResult> {
    set.next_time();
    set.prepare_image(width, height)?;

    add_candidates(&mut set.labels, &frame.labels)?;
    for contour in &frame.contours {
        add_contour_path(&mut set.labels, contour.param.id()?, contour.value, &contour.path)?;
    }
    add_candidates(&mut set.symbols, &frame.symbols)?;
    add_candidates(&mut set.images, &frame.images)?;

    if let Some(grid) = &frame.pressure {
        if grid.values.len() != grid.width * grid.height {
            bail!(
                "Pressure grid has {} values, expected {}x{}",
                grid.values.len(),
                grid.width,
                grid.height
            );
        }
        let extrema = find_extrema(&grid.data(), grid.width, grid.height, &pressure.search);
        let projection = grid
            .projection
            .unwrap_or_else(|| GridProjection::fit(grid.width, grid.height, width, height));
        let added = add_extrema_candidates(
            &mut set.pressure,
            &extrema,
            &projection,
            pressure.want_high,
            pressure.want_low,
        );
        debug!(frame = index, found = extrema.len(), added, "Registered pressure extrema");
    }
    for marker in &frame.extrema {
        set.pressure.add(marker.kind, marker.x, marker.y);
    }

    let result = FrameResult {
        frame: index,
        labels: flatten_labels(set.labels.choose_labels()?),
        symbols: flatten_labels(set.symbols.choose_labels()?),
        images: flatten_labels(set.images.choose_labels()?),
        pressure: flatten_markers(set.pressure.choose_coordinates()?),
    };

    debug!(
        frame = index,
        labels = result.labels.len(),
        symbols = result.symbols.len(),
        images = result.images.len(),
        markers = result.pressure.len(),
        "Placed frame"
    );

    Ok(result)
}

fn add_candidates(locator: &mut LabelLocator, candidates: &[Candidate]) -> Result<()> {
    for candidate in candidates {
        locator.parameter(candidate.param.id()?)?;
        locator.add(candidate.value, candidate.x, candidate.y)?;
    }
    Ok(())
}
