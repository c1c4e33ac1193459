use std::{cell::RefCell, rc::Rc};

use ecoroutes_core::{
    bus::{RouteBus, SubscriptionId},
    dataset::TrackSource,
    record::{DisplayKey, DisplayRoute, RouteEndpoint, TravelMode},
};
use geojson::{Feature, FeatureCollection, JsonObject};
use indexmap::IndexMap;
use serde_json::json;

use super::{map_ops, LineStyle, MapLayer, MarkerKind};
use crate::{config::MapConfig, render::RenderError};

/// keeps the layers drawn for each displayed route so that a route can be
/// removed without touching other routes between the same cities.
pub struct MapRenderer {
    config: MapConfig,
    tracks: Box<dyn TrackSource>,
    layers: IndexMap<DisplayKey, Vec<MapLayer>>,
}

impl MapRenderer {
    pub fn new(config: MapConfig, tracks: Box<dyn TrackSource>) -> Self {
        Self {
            config,
            tracks,
            layers: IndexMap::new(),
        }
    }

    /// draws a route in its display mode and returns the number of layers
    /// drawn. drawing a route that is already shown replaces its layers.
    pub fn plot_route(&mut self, route: &DisplayRoute) -> usize {
        let key = route.key();
        let mut drawn = vec![];
        if let Some(geometry) = self.route_geometry(route) {
            let co2 = route.co2();
            drawn.push(MapLayer::Route {
                geometry,
                style: LineStyle {
                    color: self.config.ramps.ramp(route.mode).color(co2),
                    weight: self.config.line_weight,
                    opacity: self.config.line_opacity,
                },
                co2,
                popup: map_ops::popup_text(route),
            });
        }
        drawn.extend(marker(MarkerKind::Departure, &route.record.departure));
        drawn.extend(marker(MarkerKind::Arrival, &route.record.arrival));

        let count = drawn.len();
        if self.layers.insert(key.clone(), drawn).is_some() {
            log::debug!("redrew route {key}");
        } else {
            log::debug!("drew route {key} with {count} layers");
        }
        count
    }

    /// removes the layers of exactly one displayed route. unknown keys are
    /// ignored.
    pub fn remove_route(&mut self, key: &DisplayKey) -> bool {
        match self.layers.shift_remove(key) {
            Some(_) => {
                log::debug!("removed route {key}");
                true
            }
            None => false,
        }
    }

    pub fn layers(&self, key: &DisplayKey) -> Option<&[MapLayer]> {
        self.layers.get(key).map(|l| l.as_slice())
    }

    /// displayed routes in drawing order
    pub fn keys(&self) -> impl Iterator<Item = &DisplayKey> {
        self.layers.keys()
    }

    pub fn route_count(&self) -> usize {
        self.layers.len()
    }

    /// every drawn layer as a GeoJSON feature. styling, popup text and the
    /// owning route are written to the feature properties.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .layers
            .iter()
            .flat_map(|(key, layers)| layers.iter().map(move |layer| to_feature(key, layer)))
            .collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> Result<String, RenderError> {
        let result = serde_json::to_string_pretty(&self.to_feature_collection())?;
        Ok(result)
    }

    /// subscribes a shared renderer to the bus: added routes are plotted and
    /// removed routes erased. routes added before attaching are replayed.
    pub fn attach(
        renderer: Rc<RefCell<MapRenderer>>,
        bus: &mut RouteBus,
    ) -> (SubscriptionId, SubscriptionId) {
        let on_added = Rc::clone(&renderer);
        let added = bus.subscribe_added(move |route| {
            on_added.borrow_mut().plot_route(route);
        });
        let removed = bus.subscribe_removed(move |route| {
            renderer.borrow_mut().remove_route(&route.key());
        });
        (added, removed)
    }

    fn route_geometry(&self, route: &DisplayRoute) -> Option<geo::MultiLineString<f64>> {
        let record = &route.record;
        let geometry = match route.mode {
            TravelMode::Average => map_ops::endpoint_geometry(route, None),
            TravelMode::Flight => {
                map_ops::endpoint_geometry(route, Some(self.config.arc_segments))
            }
            TravelMode::Train => {
                match self
                    .tracks
                    .load_track(&record.departure.city, &record.arrival.city)
                {
                    Ok(track) => Some(track),
                    Err(e) => {
                        log::warn!("no track drawn for {}: {e}", record.id);
                        return None;
                    }
                }
            }
        };
        if geometry.is_none() {
            log::warn!(
                "no line drawn for {}: invalid coordinates {} / {}",
                record.id,
                record.departure.coordinates,
                record.arrival.coordinates
            );
        }
        geometry
    }
}

fn marker(kind: MarkerKind, endpoint: &RouteEndpoint) -> Option<MapLayer> {
    let coordinate = endpoint.coordinate();
    if !coordinate.is_valid() {
        log::warn!("no marker for {}: invalid coordinates '{}'", endpoint.city, endpoint.coordinates);
        return None;
    }
    Some(MapLayer::Marker {
        kind,
        position: coordinate.to_point(),
        label: endpoint.city.clone(),
    })
}

fn to_feature(key: &DisplayKey, layer: &MapLayer) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(String::from("route_id"), json![key.id]);
    properties.insert(String::from("mode"), json![key.mode]);
    let geometry = match layer {
        MapLayer::Route {
            geometry,
            style,
            co2,
            popup,
        } => {
            properties.insert(String::from("layer"), json!["route"]);
            properties.insert(String::from("color"), json![style.color.to_hex()]);
            properties.insert(String::from("weight"), json![style.weight]);
            properties.insert(String::from("opacity"), json![style.opacity]);
            properties.insert(String::from("co2"), json![co2]);
            properties.insert(String::from("popup"), json![popup]);
            geojson::Geometry::from(&geo::Geometry::MultiLineString(geometry.clone()))
        }
        MapLayer::Marker {
            kind,
            position,
            label,
        } => {
            properties.insert(String::from("layer"), json![kind]);
            properties.insert(String::from("label"), json![label]);
            geojson::Geometry::from(&geo::Geometry::Point(*position))
        }
    };
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
