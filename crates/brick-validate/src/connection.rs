//! Connector alignment validation.

use brick_build::{BuildState, PartId};
use hashbrown::HashMap;

/// Result of one connection pass.
///
/// `supports` holds one `(part, supporter)` edge per discovered support
/// relation - a directed, acyclic edge set recomputed from scratch each pass
/// rather than maintained incrementally. `disconnected` lists every elevated
/// part with no aligned connector beneath it, in id order.
#[derive(Debug, Clone, Default)]
pub struct ConnectionReport {
    /// Discovered `(part, supporter)` edges.
    pub supports: Vec<(PartId, PartId)>,
    /// Parts above ground with no support, in id order.
    pub disconnected: Vec<PartId>,
}

impl ConnectionReport {
    /// True when every elevated part is supported.
    #[must_use]
    pub fn all_connected(&self) -> bool {
        self.disconnected.is_empty()
    }
}

/// Checks that every elevated part rests on aligned connectors.
///
/// A part whose bottom face sits at ground level (`y == 0`) is grounded and
/// always connected. Any other part is connected iff at least one of its
/// bottom sockets shares an exact `(x, z, y)` cell with a top stud of a
/// *different* part - which requires the supporter's top face to sit at
/// precisely the part's bottom face. Rotation is already resolved by the
/// connector enumeration, since it changes which cells a part covers.
///
/// Every matching supporter is recorded, so a wide part bridging two columns
/// gets an edge to each.
///
/// # Example
///
/// ```
/// use brick_build::BuildState;
/// use brick_types::{BrickDims, Rotation, StudCoord};
/// use brick_validate::check_connections;
///
/// let mut build = BuildState::new();
/// let brick = BrickDims::new(2, 4, 3);
/// let lower = build.insert("3001", 4, StudCoord::origin(), Rotation::R0, brick).unwrap();
/// let upper = build
///     .insert("3001", 4, StudCoord::new(0, 0, 3), Rotation::R0, brick)
///     .unwrap();
///
/// let report = check_connections(&build);
/// assert!(report.all_connected());
/// assert_eq!(report.supports, vec![(upper, lower)]);
/// ```
#[must_use]
pub fn check_connections(build: &BuildState) -> ConnectionReport {
    // Map every top stud cell to the part presenting it.
    let mut stud_map: HashMap<(i32, i32, i32), PartId> = HashMap::new();
    for part in build.parts() {
        for stud in part.top_studs() {
            stud_map.insert(stud.as_tuple(), part.id());
        }
    }

    let mut report = ConnectionReport::default();

    for part in build.parts() {
        if part.bounding_box().min.y == 0 {
            // Grounded parts need no support.
            continue;
        }

        let mut supporters: Vec<PartId> = part
            .bottom_sockets()
            .iter()
            .filter_map(|socket| stud_map.get(&socket.as_tuple()).copied())
            .filter(|&id| id != part.id())
            .collect();
        supporters.sort_unstable();
        supporters.dedup();

        if supporters.is_empty() {
            report.disconnected.push(part.id());
        } else {
            report
                .supports
                .extend(supporters.into_iter().map(|s| (part.id(), s)));
        }
    }

    report.disconnected.sort_unstable();
    report
}
