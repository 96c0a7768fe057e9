//! The world model: build orchestration and published query state.

use bg_core::{CountryId, Year};
use bg_data::BorderSource;
use bg_graph::{analytics, reach, BorderGraph, Country, CountryRegistry, GraphBuilder};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Counts reported after every successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub year: Year,
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Border records skipped for referential-integrity reasons.
    pub skipped_records: usize,
}

/// State published by one successful build.
#[derive(Debug, Clone)]
struct World {
    year: Year,
    graph: BorderGraph,
    /// The graph's vertex set, sorted by code. Never the full registry.
    countries: Vec<Country>,
}

/// Service facade over one data source.
///
/// `build_year` replaces the published world atomically: the previous
/// graph and country list stay valid and queryable until a new build
/// succeeds, and are kept unchanged when it fails. All queries are pure
/// reads over the published state.
pub struct WorldModel<S: BorderSource> {
    source: S,
    world: Option<World>,
}

impl<S: BorderSource> WorldModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            world: None,
        }
    }

    /// Build the border graph for `year` and publish it on success.
    ///
    /// Pipeline: register every country through the registry, fetch the
    /// qualifying border pairs, resolve each pair via `lookup` (records
    /// with an unregistered endpoint or equal endpoints are skipped with a
    /// warning), insert the deduplicated edges, then freeze and swap.
    pub fn build_year(&mut self, year: Year) -> AppResult<BuildSummary> {
        let mut registry = CountryRegistry::new();
        for row in self.source.fetch_countries()? {
            registry.register_or_get(Country::new(CountryId::new(row.id), row.code, row.name));
        }

        let pairs = self.source.fetch_border_pairs(year)?;
        if pairs.is_empty() {
            return Err(AppError::NoBorders { year });
        }

        let mut builder = GraphBuilder::new();
        let mut skipped = 0usize;
        for pair in pairs {
            let c1 = registry.lookup(CountryId::new(pair.c1));
            let c2 = registry.lookup(CountryId::new(pair.c2));
            match (c1, c2) {
                (Some(c1), Some(c2)) if c1.id != c2.id => {
                    builder.add_border(c1.clone(), c2.clone());
                }
                (Some(_), Some(_)) => {
                    warn!(c1 = pair.c1, c2 = pair.c2, "skipping self-loop border record");
                    skipped += 1;
                }
                _ => {
                    warn!(
                        c1 = pair.c1,
                        c2 = pair.c2,
                        "skipping border record with unregistered endpoint"
                    );
                    skipped += 1;
                }
            }
        }

        let graph = builder.build()?;
        let countries: Vec<Country> = graph.sorted_countries().into_iter().cloned().collect();
        let summary = BuildSummary {
            year,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            skipped_records: skipped,
        };
        info!(
            year,
            vertices = summary.vertex_count,
            edges = summary.edge_count,
            skipped,
            "border graph built"
        );

        // Publish only now; any failure above leaves the old world in place.
        self.world = Some(World {
            year,
            graph,
            countries,
        });
        Ok(summary)
    }

    /// Year of the currently published graph, if any.
    pub fn year(&self) -> Option<Year> {
        self.world.as_ref().map(|w| w.year)
    }

    /// The published country list, sorted by code. Empty before the first
    /// successful build.
    pub fn countries(&self) -> &[Country] {
        self.world.as_ref().map_or(&[], |w| w.countries.as_slice())
    }

    /// The published graph.
    pub fn graph(&self) -> AppResult<&BorderGraph> {
        Ok(&self.world()?.graph)
    }

    /// Per-country degree, sorted by code.
    pub fn degrees(&self) -> AppResult<Vec<(Country, usize)>> {
        let world = self.world()?;
        let degrees = analytics::degree_map(&world.graph);
        Ok(world
            .countries
            .iter()
            .map(|c| (c.clone(), degrees.get(&c.id).copied().unwrap_or(0)))
            .collect())
    }

    /// Number of connected components of the published graph.
    pub fn connected_component_count(&self) -> AppResult<usize> {
        Ok(analytics::connected_component_count(&self.world()?.graph))
    }

    /// Countries reachable from `start`, sorted by code (includes `start`).
    pub fn reachable_from(&self, start: CountryId) -> AppResult<Vec<Country>> {
        let world = self.world()?;
        if !world.graph.contains(start) {
            return Err(AppError::CountryNotInGraph { id: start });
        }

        let reachable = reach::reachable_from(&world.graph, start)?;
        let mut countries: Vec<Country> = reachable
            .iter()
            .filter_map(|&id| world.graph.country(id).cloned())
            .collect();
        countries.sort();
        Ok(countries)
    }

    /// Resolve a published country by its short code (case-insensitive).
    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.world
            .as_ref()?
            .countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    fn world(&self) -> AppResult<&World> {
        self.world.as_ref().ok_or(AppError::GraphNotBuilt)
    }
}
