//! The `Catalog` — owns every package known to the planner.
//!
//! Backed by a `BTreeMap` keyed by `PackageId`, so every iteration runs in
//! ascending id order.  That gives the selection tie-break rule
//! ("first encountered wins") a stable, reproducible meaning: lowest id.

use std::collections::BTreeMap;

use log::{debug, info};

use courier_core::{PackageId, PackageRecord, Point};

use crate::{CatalogError, CatalogResult, Package};

/// Reward assumed for packages whose snapshot entry omits one.
pub const DEFAULT_REWARD: f64 = 100.0;

/// All packages for one competition session.
#[derive(Debug, Default)]
pub struct Catalog {
    packages: BTreeMap<PackageId, Package>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from parsed snapshot records, replacing any
    /// previous contents.
    pub fn load(records: Vec<(PackageId, PackageRecord)>) -> Self {
        let mut packages = BTreeMap::new();
        for (id, record) in records {
            let pkg = Package::new(
                id,
                Point::from(record.position),
                record.dropoff.map(Point::from),
                record.reward.unwrap_or(DEFAULT_REWARD),
            );
            debug!("loaded {pkg}, dropoff {:?}", pkg.dropoff);
            packages.insert(id, pkg);
        }
        info!("catalog loaded: {} packages", packages.len());
        Self { packages }
    }

    // ── Mutators (decision loop only) ─────────────────────────────────────

    /// Attach the dropoff location disclosed for `id`.
    pub fn set_dropoff(&mut self, id: PackageId, dropoff: Point) -> CatalogResult<()> {
        let pkg = self
            .packages
            .get_mut(&id)
            .ok_or(CatalogError::PackageNotFound(id))?;
        pkg.dropoff = Some(dropoff);
        Ok(())
    }

    /// Mark `id` delivered.  Idempotent: the flag never flips back, and a
    /// repeat call changes nothing.
    pub fn mark_delivered(&mut self, id: PackageId) -> CatalogResult<()> {
        let pkg = self
            .packages
            .get_mut(&id)
            .ok_or(CatalogError::PackageNotFound(id))?;
        pkg.delivered = true;
        Ok(())
    }

    // ── Read-only access ──────────────────────────────────────────────────

    pub fn get(&self, id: PackageId) -> Option<&Package> {
        self.packages.get(&id)
    }

    /// All packages in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Packages that are scoreable: not delivered, dropoff known.
    pub fn eligible(&self) -> impl Iterator<Item = &Package> {
        self.packages.values().filter(|p| p.is_eligible())
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Count of packages not yet delivered (dropoff known or not).
    pub fn undelivered_count(&self) -> usize {
        self.packages.values().filter(|p| !p.delivered).count()
    }

    /// Total reward credited so far.  Safe against double counting since
    /// the delivered flag is idempotent.
    pub fn total_reward_delivered(&self) -> f64 {
        self.packages
            .values()
            .filter(|p| p.delivered)
            .map(|p| p.reward)
            .sum()
    }
}
