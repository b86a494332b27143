/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use std::collections::HashMap;
use std::ops::ControlFlow;

use log::{debug, trace, warn};

use crate::constants::{VertexId, WEIGHT_ZERO};
use crate::distance_queue::DistanceQueue;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::path::{Path, PathEdge};
use crate::vertex::VertexHandle;

impl<V> Graph<V> {
    /// Runs Dijkstra's algorithm from `source` and calls `visit` once for every vertex as
    /// soon as its shortest path is final, in order of increasing distance. The source
    /// itself comes first with the trivial path. Returning `ControlFlow::Break` from
    /// `visit` stops the traversal. Vertices that cannot be reached are never visited.
    ///
    /// Among paths of equal length the one found first is kept, so the reported path
    /// depends on the order in which edges were added. An edge whose use would push a
    /// distance past `Weight::max_value()` is skipped.
    pub fn dijkstra<F>(&self, source: VertexHandle, mut visit: F) -> Result<()>
    where
        F: FnMut(VertexHandle, &Path) -> ControlFlow<()>,
    {
        self.check(source)?;

        let mut queue = DistanceQueue::with_capacity(self.vertex_count());
        for v in self.vertices() {
            let distance = if v == source { Some(WEIGHT_ZERO) } else { None };
            queue.push(v.id(), distance);
        }
        // tentative paths of vertices that have a distance but are not resolved yet
        let mut paths: HashMap<VertexId, Path> = HashMap::new();
        paths.insert(source.id(), Path::new(source));

        let mut resolved = 0;
        while let Some((id, distance)) = queue.pop_min() {
            let distance = match distance {
                Some(distance) => distance,
                // everything still queued is unreachable
                None => break,
            };
            let path = match paths.remove(&id) {
                Some(path) => path,
                None => unreachable!("vertex {} has a distance but no path", id),
            };
            let vertex = VertexHandle::new(id);
            resolved += 1;
            trace!("resolved {} at distance {}", id, distance);
            if visit(vertex, &path).is_break() {
                break;
            }

            for edge in self.record(vertex)?.edges() {
                if !queue.contains(edge.target) {
                    continue;
                }
                let candidate = match distance
                    .checked_add(edge.weight)
                    .ok_or(GraphError::DistanceOverflow(edge.weight))
                {
                    Ok(candidate) => candidate,
                    Err(e) => {
                        warn!("skipping edge {} -> {}: {}", id, edge.target, e);
                        continue;
                    }
                };
                let improves = match queue.distance(edge.target).flatten() {
                    Some(current) => candidate < current,
                    None => true,
                };
                if !improves {
                    continue;
                }
                // the path distance equals `distance` and `candidate` fits, so this can't fail
                let extended =
                    path.extended(PathEdge::new(VertexHandle::new(edge.target), edge.weight))?;
                trace!("relaxed {} -> {} to {}", id, edge.target, candidate);
                paths.insert(edge.target, extended);
                queue.update(edge.target, Some(candidate));
            }
        }
        debug!(
            "dijkstra from {} resolved {} of {} vertices",
            source.id(),
            resolved,
            self.vertex_count()
        );
        Ok(())
    }

    /// The shortest path from `source` to `destination`. The search stops as soon as the
    /// destination is resolved. If it can't be reached the returned path is unreachable,
    /// i.e. `distance()` is `None`.
    pub fn shortest_path(&self, source: VertexHandle, destination: VertexHandle) -> Result<Path> {
        self.check(destination)?;
        let mut found = Path::unreachable(source);
        self.dijkstra(source, |v, path| {
            if v == destination {
                found = path.clone();
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(found)
    }

    /// Shortest paths from `source` to every reachable vertex, the source included with
    /// its trivial path. Unreachable vertices are absent from the result.
    pub fn shortest_paths(&self, source: VertexHandle) -> Result<HashMap<VertexHandle, Path>> {
        let mut paths = HashMap::new();
        self.dijkstra(source, |v, path| {
            paths.insert(v, path.clone());
            ControlFlow::Continue(())
        })?;
        Ok(paths)
    }
}
