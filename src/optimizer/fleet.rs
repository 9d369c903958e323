//! Multi-vehicle orchestration: assignment, per-vehicle sequencing, reports.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::report::{
    improvement_percent, AssignmentComparison, DetailedRoute, FleetStatistics, MethodRun,
    OptimizedRun, RoutePlan, RouteStop, RouteSummary, VehicleStatistics,
};
use super::{OptimizerConfig, SequencingMethod};
use crate::assignment::{cluster_first_assignment, greedy_assignment, AssignmentMethod};
use crate::constructive::nearest_neighbor_subset;
use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::ga::{genetic_search, rng_from_seed};
use crate::local_search::two_opt_improve;
use crate::models::{Fleet, GeoStop, Vehicle};

/// Assigns stops to a fleet and sequences every vehicle's tour.
///
/// The optimizer owns the stops, the fleet and the distance matrix built from
/// the stops. Each call to [`assign`](Self::assign) starts a new plan;
/// [`optimize_routes`](Self::optimize_routes) reorders the current plan
/// in place without changing which vehicle serves which stop.
///
/// # Examples
///
/// ```
/// use fleet_routing::assignment::AssignmentMethod;
/// use fleet_routing::models::{Fleet, GeoStop, VehicleConfig};
/// use fleet_routing::optimizer::{FleetRouteOptimizer, SequencingMethod};
///
/// let stops = vec![
///     GeoStop::new(1, -23.55, -46.63, "Rua A, 10", 3),
///     GeoStop::new(2, -23.56, -46.64, "Rua B, 20", 2),
///     GeoStop::new(3, -23.54, -46.62, "Rua C, 30", 4),
///     GeoStop::new(4, -23.57, -46.65, "Rua D, 40", 1),
/// ];
/// let fleet = Fleet::new(vec![
///     VehicleConfig::new(1, "Van 1", 6),
///     VehicleConfig::new(2, "Van 2", 6),
/// ]).unwrap();
///
/// let mut optimizer = FleetRouteOptimizer::new(stops, fleet).unwrap();
/// let assigned = optimizer.assign(AssignmentMethod::Greedy);
/// assert_eq!(assigned.unassigned_count, 0);
///
/// let plan = optimizer.optimize_routes(SequencingMethod::TwoOpt).unwrap();
/// assert!(plan.total_distance <= assigned.total_distance + 1e-9);
///
/// let stats = optimizer.statistics();
/// assert_eq!(stats.total_stops, 4);
/// assert_eq!(stats.total_load, 10);
/// ```
#[derive(Debug, Clone)]
pub struct FleetRouteOptimizer {
    stops: Vec<GeoStop>,
    fleet: Fleet,
    distances: DistanceMatrix,
    config: OptimizerConfig,
    unassigned: Vec<usize>,
    total_distance: f64,
    optimization_time: Duration,
}

impl FleetRouteOptimizer {
    /// Creates an optimizer, computing the Haversine matrix for `stops`.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidConfiguration`] if any stop has negative demand.
    pub fn new(stops: Vec<GeoStop>, fleet: Fleet) -> Result<Self> {
        let distances = DistanceMatrix::from_stops(&stops);
        Self::with_distances(stops, fleet, distances)
    }

    /// Creates an optimizer over a precomputed matrix.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidConfiguration`] if any stop has negative demand
    /// or the matrix size differs from the stop count.
    pub fn with_distances(
        stops: Vec<GeoStop>,
        mut fleet: Fleet,
        distances: DistanceMatrix,
    ) -> Result<Self> {
        if let Some(stop) = stops.iter().find(|s| s.demand() < 0) {
            return Err(RoutingError::invalid(format!(
                "stop {} has negative demand {}",
                stop.id(),
                stop.demand()
            )));
        }
        if distances.size() != stops.len() {
            return Err(RoutingError::invalid(format!(
                "distance matrix covers {} stops but {} were given",
                distances.size(),
                stops.len()
            )));
        }
        fleet.reset();

        Ok(Self {
            stops,
            fleet,
            distances,
            config: OptimizerConfig::default(),
            unassigned: Vec::new(),
            total_distance: 0.0,
            optimization_time: Duration::ZERO,
        })
    }

    /// Replaces the settings.
    pub fn with_config(mut self, config: OptimizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Stops in input order; indices everywhere refer to this list.
    pub fn stops(&self) -> &[GeoStop] {
        &self.stops
    }

    /// The fleet with its current assignment.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Distance matrix over [`stops`](Self::stops).
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Current settings.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Stops left out of the current plan.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Summed closed-loop distance of the current plan in km.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Time spent on the current plan: the last assignment plus every
    /// sequencing pass since.
    pub fn optimization_time(&self) -> Duration {
        self.optimization_time
    }

    /// Assigns every stop with `method`, replacing any previous plan.
    ///
    /// Route distances in the returned plan follow assignment order.
    pub fn assign(&mut self, method: AssignmentMethod) -> RoutePlan {
        let started = Instant::now();
        let assignment = match method {
            AssignmentMethod::Greedy => greedy_assignment(&self.stops, &mut self.fleet),
            AssignmentMethod::ClusterFirst => {
                cluster_first_assignment(&self.stops, &self.distances, &mut self.fleet)
            }
        };
        self.unassigned = assignment.unassigned;
        self.optimization_time = started.elapsed();

        if !self.unassigned.is_empty() {
            warn!(
                %method,
                unassigned = self.unassigned.len(),
                "stops exceed remaining fleet capacity"
            );
        }
        let plan = self.refresh_distances();
        info!(
            %method,
            vehicles = self.fleet.len(),
            assigned = self.stops.len() - self.unassigned.len(),
            distance = plan.total_distance,
            "stops assigned"
        );
        plan
    }

    /// Parses `name` and runs [`assign`](Self::assign).
    pub fn assign_by_name(&mut self, name: &str) -> Result<RoutePlan> {
        let method = name.parse()?;
        Ok(self.assign(method))
    }

    /// Reorders each vehicle's stops with `method`. Vehicles with fewer than
    /// two stops are left as they are.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidConfiguration`] if `method` is genetic and the
    /// genetic parameters are invalid. No vehicle is modified in that case.
    pub fn optimize_routes(&mut self, method: SequencingMethod) -> Result<RoutePlan> {
        if method == SequencingMethod::Genetic {
            self.config.genetic.validate()?;
        }

        let started = Instant::now();
        let orders: Vec<Option<Vec<usize>>> = if self.config.parallel {
            self.fleet
                .vehicles()
                .par_iter()
                .map(|v| self.sequence_vehicle(v, method))
                .collect::<Result<_>>()?
        } else {
            self.fleet
                .vehicles()
                .iter()
                .map(|v| self.sequence_vehicle(v, method))
                .collect::<Result<_>>()?
        };

        let mut reordered = 0usize;
        for (vehicle, order) in self.fleet.vehicles_mut().iter_mut().zip(orders) {
            if let Some(order) = order {
                vehicle.set_order(order);
                reordered += 1;
            }
        }
        self.optimization_time += started.elapsed();

        let before = self.total_distance;
        let plan = self.refresh_distances();
        info!(
            %method,
            vehicles = reordered,
            parallel = self.config.parallel,
            before,
            after = plan.total_distance,
            "routes sequenced"
        );
        Ok(plan)
    }

    /// Parses `name` and runs [`optimize_routes`](Self::optimize_routes).
    /// An unrecognized name is rejected before any vehicle is touched.
    pub fn optimize_routes_by_name(&mut self, name: &str) -> Result<RoutePlan> {
        let method = name.parse()?;
        self.optimize_routes(method)
    }

    fn sequence_vehicle(
        &self,
        vehicle: &Vehicle,
        method: SequencingMethod,
    ) -> Result<Option<Vec<usize>>> {
        let assigned = vehicle.assigned();
        if assigned.len() < 2 {
            return Ok(None);
        }

        let order = match method {
            SequencingMethod::NearestNeighbor => {
                nearest_neighbor_subset(assigned, assigned[0], &self.distances)
            }
            SequencingMethod::TwoOpt => {
                two_opt_improve(assigned, &self.distances, self.config.two_opt_max_iterations).0
            }
            SequencingMethod::Genetic => {
                let genetic = &self.config.genetic;
                let seed = genetic
                    .seed
                    .map(|s| s.wrapping_add(vehicle.id() as u64));
                let mut rng = rng_from_seed(seed);
                genetic_search(assigned, &self.distances, genetic, &mut rng)?.0
            }
        };
        debug!(vehicle = vehicle.id(), stops = order.len(), %method, "vehicle sequenced");
        Ok(Some(order))
    }

    fn refresh_distances(&mut self) -> RoutePlan {
        let mut total = 0.0;
        for vehicle in self.fleet.vehicles_mut() {
            let d = self.distances.tour_distance(vehicle.assigned());
            vehicle.set_total_distance(d);
            total += d;
        }
        self.total_distance = total;
        self.route_plan()
    }

    /// Snapshot of the current plan.
    pub fn route_plan(&self) -> RoutePlan {
        let routes = self
            .fleet
            .vehicles()
            .iter()
            .map(|v| RouteSummary {
                vehicle_id: v.id(),
                vehicle_name: v.name().to_string(),
                stops: v.assigned().to_vec(),
                distance: v.total_distance(),
                load: v.load(),
                capacity: v.capacity(),
                utilization: v.utilization(),
                stops_count: v.assigned().len(),
            })
            .collect();
        RoutePlan {
            routes,
            total_distance: self.total_distance,
            unassigned: self.unassigned.clone(),
            unassigned_count: self.unassigned.len(),
        }
    }

    /// Fleet-wide and per-vehicle aggregates of the current plan.
    pub fn statistics(&self) -> FleetStatistics {
        let vehicles: Vec<VehicleStatistics> = self
            .fleet
            .vehicles()
            .iter()
            .map(|v| VehicleStatistics {
                id: v.id(),
                name: v.name().to_string(),
                stops: v.assigned().len(),
                load: v.load(),
                capacity: v.capacity(),
                utilization: v.utilization(),
                distance: v.total_distance(),
            })
            .collect();

        let total_capacity = self.fleet.total_capacity();
        let total_load = self.fleet.total_load();
        let overall_utilization = if total_capacity > 0 {
            total_load as f64 / total_capacity as f64
        } else {
            0.0
        };
        let average_distance_per_vehicle = if vehicles.is_empty() {
            0.0
        } else {
            self.total_distance / vehicles.len() as f64
        };

        FleetStatistics {
            total_vehicles: vehicles.len(),
            total_stops: vehicles.iter().map(|v| v.stops).sum(),
            unassigned_stops: self.unassigned.len(),
            total_distance_km: self.total_distance,
            average_distance_per_vehicle,
            total_capacity,
            total_load,
            overall_utilization,
            optimization_secs: self.optimization_time.as_secs_f64(),
            vehicles,
        }
    }

    /// Every vehicle's route with stop details in visiting order.
    pub fn detailed_routes(&self) -> Vec<DetailedRoute> {
        self.fleet
            .vehicles()
            .iter()
            .map(|v| {
                let order = v.assigned();
                let stops = order
                    .iter()
                    .enumerate()
                    .map(|(pos, &idx)| {
                        let stop = &self.stops[idx];
                        let next = order[(pos + 1) % order.len()];
                        RouteStop {
                            order: pos + 1,
                            stop_index: idx,
                            stop_id: stop.id(),
                            address: stop.address().to_string(),
                            latitude: stop.latitude(),
                            longitude: stop.longitude(),
                            demand: stop.demand(),
                            distance_to_next: self.distances.get(idx, next),
                        }
                    })
                    .collect();
                DetailedRoute {
                    vehicle_id: v.id(),
                    vehicle_name: v.name().to_string(),
                    capacity: v.capacity(),
                    load: v.load(),
                    utilization: v.utilization(),
                    total_distance: v.total_distance(),
                    stops,
                }
            })
            .collect()
    }

    /// Runs greedy and cluster-first assignment, each followed by 2-opt, and
    /// reports distance, unassigned count and timing per method.
    ///
    /// The optimizer is left holding the optimized cluster-first plan.
    pub fn compare_assignment_methods(&mut self) -> Result<AssignmentComparison> {
        let greedy = self.run_method(AssignmentMethod::Greedy)?;
        let cluster_first = self.run_method(AssignmentMethod::ClusterFirst)?;

        let comparison = AssignmentComparison {
            greedy: greedy.0,
            cluster_first: cluster_first.0,
            greedy_optimized: greedy.1,
            cluster_first_optimized: cluster_first.1,
        };
        info!(
            best = %comparison.best(),
            greedy = comparison.greedy_optimized.total_distance,
            cluster_first = comparison.cluster_first_optimized.total_distance,
            "assignment methods compared"
        );
        Ok(comparison)
    }

    fn run_method(&mut self, method: AssignmentMethod) -> Result<(MethodRun, OptimizedRun)> {
        let started = Instant::now();
        let plan = self.assign(method);
        let raw = MethodRun {
            method,
            total_distance: plan.total_distance,
            unassigned: plan.unassigned_count,
            elapsed_secs: started.elapsed().as_secs_f64(),
        };

        let optimized = self.optimize_routes(SequencingMethod::TwoOpt)?;
        let run = OptimizedRun {
            method,
            total_distance: optimized.total_distance,
            unassigned: optimized.unassigned_count,
            improvement: improvement_percent(raw.total_distance, optimized.total_distance),
            elapsed_secs: started.elapsed().as_secs_f64(),
        };
        Ok((raw, run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GeneticConfig;
    use crate::models::VehicleConfig;

    fn city_stops(n: usize) -> Vec<GeoStop> {
        (0..n)
            .map(|i| {
                let x = ((i * 37 + 11) % 97) as f64 / 97.0;
                let y = ((i * 53 + 29) % 89) as f64 / 89.0;
                let demand = (i % 4) as i32 + 1;
                GeoStop::new(i + 1, -23.6 + 0.1 * x, -46.7 + 0.1 * y, format!("Rua {i}"), demand)
            })
            .collect()
    }

    fn fleet(capacities: &[i32]) -> Fleet {
        Fleet::new(
            capacities
                .iter()
                .enumerate()
                .map(|(i, &c)| VehicleConfig::new(i + 1, format!("Van {}", i + 1), c))
                .collect(),
        )
        .expect("valid fleet")
    }

    fn sorted(v: &[usize]) -> Vec<usize> {
        let mut v = v.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_rejects_negative_demand() {
        let stops = vec![GeoStop::new(9, 0.0, 0.0, "X", -1)];
        let err = FleetRouteOptimizer::new(stops, fleet(&[5])).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_with_distances_size_mismatch() {
        let err =
            FleetRouteOptimizer::with_distances(city_stops(3), fleet(&[5]), DistanceMatrix::new(2))
                .unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_zero_vehicles() {
        let mut opt = FleetRouteOptimizer::new(city_stops(5), fleet(&[])).expect("valid");
        let plan = opt.assign(AssignmentMethod::Greedy);
        assert_eq!(sorted(&plan.unassigned), vec![0, 1, 2, 3, 4]);
        let plan = opt.optimize_routes(SequencingMethod::TwoOpt).expect("valid");
        assert_eq!(plan.total_distance, 0.0);
        assert!(plan.routes.is_empty());

        let stats = opt.statistics();
        assert_eq!(stats.unassigned_stops, 5);
        assert_eq!(stats.overall_utilization, 0.0);
        assert_eq!(stats.average_distance_per_vehicle, 0.0);
    }

    #[test]
    fn test_zero_stops() {
        let mut opt = FleetRouteOptimizer::new(Vec::new(), fleet(&[5, 5])).expect("valid");
        for method in AssignmentMethod::ALL {
            let plan = opt.assign(method);
            assert_eq!(plan.unassigned_count, 0);
            assert_eq!(plan.total_distance, 0.0);
        }
        let cmp = opt.compare_assignment_methods().expect("valid");
        assert_eq!(cmp.greedy_optimized.total_distance, 0.0);
        assert_eq!(cmp.cluster_first_optimized.improvement, 0.0);
    }

    #[test]
    fn test_two_opt_keeps_stop_sets() {
        let mut opt = FleetRouteOptimizer::new(city_stops(24), fleet(&[25, 25, 25])).expect("valid");
        let before = opt.assign(AssignmentMethod::Greedy);
        let after = opt.optimize_routes(SequencingMethod::TwoOpt).expect("valid");

        assert_eq!(before.unassigned, after.unassigned);
        for (b, a) in before.routes.iter().zip(&after.routes) {
            assert_eq!(sorted(&b.stops), sorted(&a.stops));
            assert_eq!(b.load, a.load);
            assert_eq!(b.stops.first(), a.stops.first());
            assert!(a.distance <= b.distance + 1e-9);
        }
        assert!(after.total_distance <= before.total_distance + 1e-9);
        let sum: f64 = after.routes.iter().map(|r| r.distance).sum();
        assert!((sum - after.total_distance).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_neighbor_per_vehicle() {
        let mut opt = FleetRouteOptimizer::new(city_stops(20), fleet(&[30, 30])).expect("valid");
        let before = opt.assign(AssignmentMethod::ClusterFirst);
        let after = opt
            .optimize_routes_by_name("nearest_neighbor")
            .expect("valid");
        for (b, a) in before.routes.iter().zip(&after.routes) {
            assert_eq!(sorted(&b.stops), sorted(&a.stops));
            assert_eq!(b.stops.first(), a.stops.first());
        }
    }

    #[test]
    fn test_short_routes_untouched() {
        // Two stops, two roomy vans: greedy gives each van one stop
        let stops = vec![
            GeoStop::new(1, 0.0, 0.0, "A", 5),
            GeoStop::new(2, 0.0, 0.1, "B", 5),
        ];
        let mut opt = FleetRouteOptimizer::new(stops, fleet(&[10, 10])).expect("valid");
        let before = opt.assign(AssignmentMethod::Greedy);
        assert!(before.routes.iter().all(|r| r.stops_count == 1));
        let after = opt.optimize_routes(SequencingMethod::Genetic).expect("valid");
        assert_eq!(before.routes, after.routes);
        assert_eq!(after.total_distance, 0.0);
    }

    #[test]
    fn test_unknown_method_rejected_without_mutation() {
        let mut opt = FleetRouteOptimizer::new(city_stops(12), fleet(&[20, 20])).expect("valid");
        let before = opt.assign(AssignmentMethod::Greedy);
        let err = opt.optimize_routes_by_name("three_opt").unwrap_err();
        assert_eq!(
            err,
            RoutingError::UnknownMethod {
                kind: "sequencing",
                name: "three_opt".to_string()
            }
        );
        assert_eq!(opt.route_plan(), before);
        assert!(opt.assign_by_name("sweep").is_err());
        assert_eq!(opt.route_plan(), before);
    }

    #[test]
    fn test_invalid_genetic_config_rejected_without_mutation() {
        let config = OptimizerConfig::default()
            .with_genetic(GeneticConfig::default().with_population_size(0));
        let mut opt = FleetRouteOptimizer::new(city_stops(12), fleet(&[20, 20]))
            .expect("valid")
            .with_config(config);
        let before = opt.assign(AssignmentMethod::ClusterFirst);
        assert!(opt.optimize_routes(SequencingMethod::Genetic).is_err());
        assert_eq!(opt.route_plan(), before);
    }

    #[test]
    fn test_seeded_genetic_is_reproducible() {
        let config = OptimizerConfig::default().with_genetic(
            GeneticConfig::default()
                .with_population_size(20)
                .with_generations(30)
                .with_seed(11),
        );
        let run = || {
            let mut opt = FleetRouteOptimizer::new(city_stops(18), fleet(&[20, 20]))
                .expect("valid")
                .with_config(config.clone());
            opt.assign(AssignmentMethod::Greedy);
            opt.optimize_routes(SequencingMethod::Genetic).expect("valid")
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let genetic = GeneticConfig::default()
            .with_population_size(20)
            .with_generations(20)
            .with_seed(3);
        for method in [SequencingMethod::TwoOpt, SequencingMethod::Genetic] {
            let plan_for = |parallel: bool| {
                let config = OptimizerConfig::default()
                    .with_genetic(genetic.clone())
                    .with_parallel(parallel);
                let mut opt = FleetRouteOptimizer::new(city_stops(30), fleet(&[20, 20, 20, 20]))
                    .expect("valid")
                    .with_config(config);
                opt.assign(AssignmentMethod::ClusterFirst);
                opt.optimize_routes(method).expect("valid")
            };
            assert_eq!(plan_for(false), plan_for(true));
        }
    }

    #[test]
    fn test_statistics_totals() {
        let stops = city_stops(10);
        let demand: i64 = stops.iter().map(|s| i64::from(s.demand())).sum();
        let mut opt = FleetRouteOptimizer::new(stops, fleet(&[15, 15])).expect("valid");
        opt.assign(AssignmentMethod::Greedy);
        opt.optimize_routes(SequencingMethod::TwoOpt).expect("valid");

        let stats = opt.statistics();
        assert_eq!(stats.total_vehicles, 2);
        assert_eq!(stats.total_capacity, 30);
        assert_eq!(stats.total_load + unassigned_demand(&opt), demand);
        assert_eq!(stats.total_stops + stats.unassigned_stops, 10);
        assert!((stats.overall_utilization - stats.total_load as f64 / 30.0).abs() < 1e-12);
        let sum: f64 = stats.vehicles.iter().map(|v| v.distance).sum();
        assert!((sum - stats.total_distance_km).abs() < 1e-9);
        assert!((stats.average_distance_per_vehicle * 2.0 - stats.total_distance_km).abs() < 1e-9);
    }

    fn unassigned_demand(opt: &FleetRouteOptimizer) -> i64 {
        opt.unassigned()
            .iter()
            .map(|&i| i64::from(opt.stops()[i].demand()))
            .sum()
    }

    #[test]
    fn test_detailed_routes_wrap_to_first_stop() {
        let mut opt = FleetRouteOptimizer::new(city_stops(9), fleet(&[30])).expect("valid");
        opt.assign(AssignmentMethod::Greedy);
        opt.optimize_routes(SequencingMethod::TwoOpt).expect("valid");

        let routes = opt.detailed_routes();
        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.stops.len(), 9);
        assert_eq!(route.stops[0].order, 1);
        assert_eq!(route.stops[8].order, 9);

        let first = route.stops[0].stop_index;
        let last = route.stops[8].stop_index;
        assert_eq!(route.stops[8].distance_to_next, opt.distances().get(last, first));
        let sum: f64 = route.stops.iter().map(|s| s.distance_to_next).sum();
        assert!((sum - route.total_distance).abs() < 1e-9);
        assert_eq!(route.stops[0].stop_id, opt.stops()[first].id());
    }

    #[test]
    fn test_compare_assignment_methods() {
        let mut opt = FleetRouteOptimizer::new(city_stops(30), fleet(&[20, 20, 20])).expect("valid");
        let cmp = opt.compare_assignment_methods().expect("valid");

        assert_eq!(cmp.greedy.method, AssignmentMethod::Greedy);
        assert_eq!(cmp.cluster_first.method, AssignmentMethod::ClusterFirst);
        for (raw, optimized) in [
            (&cmp.greedy, &cmp.greedy_optimized),
            (&cmp.cluster_first, &cmp.cluster_first_optimized),
        ] {
            assert_eq!(raw.unassigned, optimized.unassigned);
            assert!(optimized.total_distance <= raw.total_distance + 1e-9);
            assert!(optimized.improvement >= -1e-9);
            assert!(optimized.elapsed_secs >= raw.elapsed_secs);
        }
        assert_eq!(opt.total_distance(), cmp.cluster_first_optimized.total_distance);

        let ranking = cmp.ranking();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].method, cmp.best());
    }
}
