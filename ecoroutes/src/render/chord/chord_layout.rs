use std::{collections::BTreeMap, f64::consts::TAU};

use super::WeightMatrix;

/// the arc of one node around the circle. angles are radians clockwise from
/// twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordGroup {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// total weight incident to the node
    pub value: f64,
}

/// one end of a ribbon, a slice of its node's arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordSide {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: f64,
}

/// a ribbon joining two arcs. the source is the side with the larger value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordRibbon {
    pub source: ChordSide,
    pub target: ChordSide,
}

impl ChordRibbon {
    pub fn touches(&self, index: usize) -> bool {
        self.source.index == index || self.target.index == index
    }
}

#[derive(Default)]
struct PendingRibbon {
    source: Option<ChordSide>,
    target: Option<ChordSide>,
}

/// circular layout of a weight matrix: each node receives an arc whose angular
/// size is proportional to its row sum, arcs are separated by `pad_angle`, and
/// within an arc the slices are ordered by descending weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChordLayout {
    pub groups: Vec<ChordGroup>,
    pub ribbons: Vec<ChordRibbon>,
}

impl ChordLayout {
    pub fn compute(matrix: &WeightMatrix, pad_angle: f64) -> ChordLayout {
        let n = matrix.len();
        if n == 0 {
            return ChordLayout::default();
        }
        let group_sums = (0..n).map(|i| matrix.row_sum(i)).collect::<Vec<_>>();
        let total: f64 = group_sums.iter().sum();
        let k = if total > 0.0 {
            (TAU - pad_angle * n as f64).max(0.0) / total
        } else {
            0.0
        };
        // with nothing to draw the arcs collapse to points spread evenly
        let dx = if k > 0.0 { pad_angle } else { TAU / n as f64 };

        let mut pending: BTreeMap<(usize, usize), PendingRibbon> = BTreeMap::new();
        let mut groups = Vec::with_capacity(n);
        let mut x = 0.0;
        for (i, group_sum) in group_sums.iter().enumerate() {
            let x0 = x;
            let mut subgroups = (0..n)
                .filter(|&j| matrix.get(i, j) != 0.0 || matrix.get(j, i) != 0.0)
                .collect::<Vec<_>>();
            subgroups.sort_by(|&a, &b| matrix.get(i, b).total_cmp(&matrix.get(i, a)));
            for j in subgroups {
                let value = matrix.get(i, j);
                let side = ChordSide {
                    index: i,
                    start_angle: x,
                    end_angle: x + value * k,
                    value,
                };
                x = side.end_angle;
                let entry = pending.entry((i.min(j), i.max(j))).or_default();
                if i < j {
                    entry.source = Some(side);
                } else {
                    entry.target = Some(side);
                    if i == j {
                        entry.source = Some(side);
                    }
                }
                if let (Some(source), Some(target)) = (entry.source, entry.target) {
                    if source.value < target.value {
                        entry.source = Some(target);
                        entry.target = Some(source);
                    }
                }
            }
            groups.push(ChordGroup {
                index: i,
                start_angle: x0,
                end_angle: x,
                value: *group_sum,
            });
            x += dx;
        }

        let ribbons = pending
            .into_values()
            .filter_map(|p| match (p.source, p.target) {
                (Some(source), Some(target)) => Some(ChordRibbon { source, target }),
                _ => None,
            })
            .collect();
        ChordLayout { groups, ribbons }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> WeightMatrix {
        let nodes = (0..rows.len()).map(|i| format!("n{i}")).collect();
        WeightMatrix::from_rows(nodes, rows).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_two_nodes_split_circle() {
        let layout = ChordLayout::compute(&matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]]), 0.0);
        assert_eq!(layout.groups.len(), 2);
        assert!(close(layout.groups[0].start_angle, 0.0));
        assert!(close(layout.groups[0].end_angle, std::f64::consts::PI));
        assert!(close(layout.groups[1].end_angle, TAU));
        assert_eq!(layout.ribbons.len(), 1);
        assert_eq!(layout.ribbons[0].source.index, 0);
        assert_eq!(layout.ribbons[0].target.index, 1);
    }

    #[test]
    fn test_arcs_and_padding_fill_circle() {
        let layout = ChordLayout::compute(
            &matrix(vec![
                vec![0.0, 1.0, 3.0],
                vec![1.0, 0.0, 2.0],
                vec![3.0, 2.0, 0.0],
            ]),
            0.05,
        );
        let spans: f64 = layout.groups.iter().map(|g| g.end_angle - g.start_angle).sum();
        assert!(close(spans + 3.0 * 0.05, TAU));
        // arc size is proportional to the row sum
        let k = (layout.groups[2].end_angle - layout.groups[2].start_angle) / 5.0;
        assert!(close(layout.groups[0].end_angle - layout.groups[0].start_angle, 4.0 * k));
        assert_eq!(layout.ribbons.len(), 3);
    }

    #[test]
    fn test_subgroups_sorted_descending() {
        let layout = ChordLayout::compute(
            &matrix(vec![
                vec![0.0, 1.0, 3.0],
                vec![1.0, 0.0, 0.0],
                vec![3.0, 0.0, 0.0],
            ]),
            0.0,
        );
        let heavy = layout
            .ribbons
            .iter()
            .find(|r| r.touches(0) && r.touches(2))
            .unwrap();
        let side = if heavy.source.index == 0 { heavy.source } else { heavy.target };
        assert!(close(side.start_angle, 0.0));
    }

    #[test]
    fn test_zero_matrix_spreads_empty_arcs() {
        let layout = ChordLayout::compute(&matrix(vec![vec![0.0; 4]; 4]), 0.05);
        assert!(layout.ribbons.is_empty());
        for (i, group) in layout.groups.iter().enumerate() {
            assert!(close(group.start_angle, i as f64 * TAU / 4.0));
            assert!(close(group.start_angle, group.end_angle));
        }
    }

    #[test]
    fn test_empty_matrix() {
        let layout = ChordLayout::compute(&matrix(vec![]), 0.05);
        assert!(layout.groups.is_empty());
    }
}
