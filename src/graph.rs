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

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{VertexId, Weight, WEIGHT_ZERO};
use crate::error::{GraphError, Result};
use crate::id_generator::IdGenerator;
use crate::vertex::{Edge, Vertex, VertexHandle};

/// Whether an edge only goes one way or is always mirrored.
#[derive(Eq, PartialEq, Clone, Copy, Deserialize, Serialize, Debug)]
pub enum GraphType {
    /// `A -> B` is independent of `B -> A`.
    Directed,
    /// Adding or removing `A -> B` does the same to `B -> A`.
    Symmetric,
}

/// A weighted multigraph stored as adjacency lists.
///
/// Every vertex owns its outgoing edges and an arbitrary payload of type `V`. Vertices are
/// addressed through `VertexHandle`s, which hold nothing but the vertex id, so a handle to
/// a removed vertex is reported as `GraphError::VertexNotFound` rather than dangling.
///
/// Only id allocation is synchronized internally. Mutation takes `&mut self`, so a graph
/// shared between threads needs an outer lock.
#[derive(Debug)]
pub struct Graph<V = ()> {
    graph_type: GraphType,
    vertices: BTreeMap<VertexId, Vertex<V>>,
    ids: IdGenerator,
}

impl<V> Graph<V> {
    pub fn new(graph_type: GraphType) -> Self {
        Graph {
            graph_type,
            vertices: BTreeMap::new(),
            ids: IdGenerator::new(),
        }
    }

    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    pub fn new_vertex(&mut self) -> VertexHandle
    where
        V: Default,
    {
        self.new_vertex_with(V::default())
    }

    pub fn new_vertex_with(&mut self, value: V) -> VertexHandle {
        let id = self.ids.next_id();
        self.vertices.insert(id, Vertex::new(id, value));
        VertexHandle::new(id)
    }

    /// Removes the vertex with the given id together with every edge pointing to it.
    /// Returns false if there is no such vertex. This scans all remaining edges.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if self.vertices.remove(&id).is_none() {
            return false;
        }
        let removed: usize = self
            .vertices
            .values_mut()
            .map(|v| v.remove_edges_to(id))
            .sum();
        debug!(
            "removed vertex {} and {} edges pointing to it",
            id, removed
        );
        true
    }

    /// Adds an edge from `from` to `to`, and the mirrored edge as well if the graph is
    /// symmetric. Parallel edges are allowed. Negative weights are rejected.
    pub fn add_edge(&mut self, from: VertexHandle, to: VertexHandle, weight: Weight) -> Result<()> {
        if weight < WEIGHT_ZERO {
            return Err(GraphError::InvalidWeight(weight));
        }
        self.check(to)?;
        self.record_mut(from)?.add_edge(to.id(), weight);
        if self.graph_type == GraphType::Symmetric {
            self.record_mut(to)?.add_edge(from.id(), weight);
        }
        Ok(())
    }

    /// Removes every edge from `from` to `to`, and every edge from `to` to `from` if the
    /// graph is symmetric. Returns the number of edges removed from `from`'s list.
    pub fn remove_edges(&mut self, from: VertexHandle, to: VertexHandle) -> Result<usize> {
        self.check(to)?;
        let removed = self.record_mut(from)?.remove_edges_to(to.id());
        if self.graph_type == GraphType::Symmetric {
            self.record_mut(to)?.remove_edges_to(from.id());
        }
        Ok(removed)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edge records. In a symmetric graph each undirected connection
    /// counts twice.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.edges().len()).sum()
    }

    pub fn contains_vertex(&self, vertex: VertexHandle) -> bool {
        self.vertices.contains_key(&vertex.id())
    }

    /// The handle of a live vertex.
    pub fn vertex(&self, id: VertexId) -> Option<VertexHandle> {
        self.vertices.get(&id).map(|v| VertexHandle::new(v.id()))
    }

    /// All live vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        self.vertices.keys().map(|&id| VertexHandle::new(id))
    }

    /// Outgoing edges of `vertex` in insertion order.
    pub fn edges_from(&self, vertex: VertexHandle) -> Result<&[Edge]> {
        self.record(vertex).map(|v| v.edges())
    }

    pub fn value(&self, vertex: VertexHandle) -> Option<&V> {
        self.vertices.get(&vertex.id()).map(|v| &v.value)
    }

    pub fn value_mut(&mut self, vertex: VertexHandle) -> Option<&mut V> {
        self.vertices.get_mut(&vertex.id()).map(|v| &mut v.value)
    }

    /// Replaces the payload of `vertex` and returns the previous one.
    pub fn set_value(&mut self, vertex: VertexHandle, value: V) -> Result<V> {
        let record = self.record_mut(vertex)?;
        Ok(std::mem::replace(&mut record.value, value))
    }

    pub(crate) fn record(&self, vertex: VertexHandle) -> Result<&Vertex<V>> {
        self.vertices
            .get(&vertex.id())
            .ok_or(GraphError::VertexNotFound(vertex.id()))
    }

    fn record_mut(&mut self, vertex: VertexHandle) -> Result<&mut Vertex<V>> {
        self.vertices
            .get_mut(&vertex.id())
            .ok_or(GraphError::VertexNotFound(vertex.id()))
    }

    pub(crate) fn check(&self, vertex: VertexHandle) -> Result<()> {
        self.record(vertex).map(|_| ())
    }
}

/// One line per vertex in ascending id order, e.g. `[1] -> [2], [3]`. Meant for logs, not
/// for parsing.
impl<V> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.vertices.values() {
            writeln!(f, "{}", v)?;
        }
        Ok(())
    }
}
