use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::node::{Categories, Detail, Node};
use crate::record::Record;
use crate::scale::PowScale;
use narwhal::Point;
use rand::Rng;

/// Radius scale for a dataset: square root over `[0, headroom * max(total_amount)]`.
///
/// Every magnitude is parsed up front, so one malformed row rejects the whole dataset instead of
/// skewing the shared domain.
pub fn radius_scale(records: &[Record], config: &ChartConfig) -> Result<(PowScale, Vec<f64>)> {
    if records.is_empty() {
        return Err(Error::EmptyDataset);
    }
    let magnitudes = records
        .iter()
        .enumerate()
        .map(|(i, r)| r.magnitude(i + 1))
        .collect::<Result<Vec<f64>>>()?;
    let max = magnitudes.iter().copied().fold(0.0_f64, f64::max);
    let scale = PowScale::sqrt_with_headroom(max, config.domain_headroom, config.radius_range);
    Ok((scale, magnitudes))
}

/// Turns dataset rows into nodes, largest first.
///
/// Nodes start scattered uniformly over the canvas. Equal magnitudes keep their input order.
pub fn build_nodes<R: Rng>(
    records: &[Record],
    config: &ChartConfig,
    rng: &mut R,
) -> Result<Vec<Node>> {
    let (scale, magnitudes) = radius_scale(records, config)?;

    let mut nodes: Vec<Node> = records
        .iter()
        .zip(magnitudes)
        .map(|(r, value)| {
            let position = Point::new(
                rng.gen_range(0.0..config.width),
                rng.gen_range(0.0..config.height),
            );
            Node::new(
                r.id.clone(),
                scale.apply(value),
                value,
                r.group.clone(),
                Categories {
                    support: r.support.clone(),
                    office: r.office.clone(),
                    ministry: r.ministry.clone(),
                    media: r.media.clone(),
                },
                Detail {
                    name: r.name.clone(),
                    description: r.description.clone(),
                    image: r.image.clone(),
                },
                position,
            )
        })
        .collect();

    nodes.sort_by(|a, b| b.value().total_cmp(&a.value()));

    tracing::info!(
        nodes = nodes.len(),
        domain_max = scale.domain()[1],
        "nodes built"
    );
    Ok(nodes)
}
