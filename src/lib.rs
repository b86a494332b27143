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

//! An in-memory weighted multigraph with single-source shortest path queries.
//!
//! ```
//! use weighted_graph::{Graph, GraphType};
//!
//! let mut graph: Graph = Graph::new(GraphType::Directed);
//! let a = graph.new_vertex();
//! let b = graph.new_vertex();
//! let c = graph.new_vertex();
//! graph.add_edge(a, b, 2).unwrap();
//! graph.add_edge(b, c, 3).unwrap();
//! graph.add_edge(a, c, 9).unwrap();
//!
//! let path = graph.shortest_path(a, c).unwrap();
//! assert_eq!(Some(5), path.distance());
//! assert_eq!(vec![b, c], path.vertices());
//! ```

mod constants;
mod dijkstra;
mod distance_queue;
mod error;
mod graph;
mod id_generator;
mod path;
mod vertex;

pub use crate::constants::{distance_or_sentinel, VertexId, Weight, NO_DISTANCE};
pub use crate::distance_queue::DistanceQueue;
pub use crate::error::{GraphError, Result};
pub use crate::graph::{Graph, GraphType};
pub use crate::id_generator::IdGenerator;
pub use crate::path::{Path, PathEdge};
pub use crate::vertex::{Edge, VertexHandle};
