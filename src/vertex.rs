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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{VertexId, Weight};

/// A lightweight reference to a vertex owned by a `Graph`. Handles are `Copy` and carry
/// only the vertex id, so they stay cheap to pass around. A handle whose vertex has been
/// removed is detected by the graph and reported as `GraphError::VertexNotFound`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, Deserialize, Serialize, Debug)]
pub struct VertexHandle {
    id: VertexId,
}

impl VertexHandle {
    pub(crate) fn new(id: VertexId) -> Self {
        VertexHandle { id }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }
}

impl fmt::Display for VertexHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.id)
    }
}

/// A directed arc stored in the outgoing list of its source vertex.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(target: VertexId, weight: Weight) -> Self {
        Edge { target, weight }
    }
}

#[derive(Debug)]
pub(crate) struct Vertex<V> {
    id: VertexId,
    outgoing: Vec<Edge>,
    pub(crate) value: V,
}

impl<V> Vertex<V> {
    pub fn new(id: VertexId, value: V) -> Self {
        Vertex {
            id,
            outgoing: vec![],
            value,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn edges(&self) -> &[Edge] {
        &self.outgoing
    }

    pub fn add_edge(&mut self, target: VertexId, weight: Weight) {
        self.outgoing.push(Edge::new(target, weight));
    }

    /// Removes every edge pointing to `target` and returns how many were removed. The
    /// relative order of the remaining edges is kept.
    pub fn remove_edges_to(&mut self, target: VertexId) -> usize {
        let before = self.outgoing.len();
        self.outgoing.retain(|e| e.target != target);
        before - self.outgoing.len()
    }
}

impl<V> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.id)?;
        if self.outgoing.is_empty() {
            return Ok(());
        }
        write!(f, " -> ")?;
        for (i, e) in self.outgoing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}]", e.target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn remove_edges_to_strips_parallel_edges() {
        let mut v = Vertex::new(id(1), ());
        v.add_edge(id(2), 1);
        v.add_edge(id(3), 4);
        v.add_edge(id(2), 5);
        v.add_edge(id(4), 2);
        assert_eq!(2, v.remove_edges_to(id(2)));
        assert_eq!(&[Edge::new(id(3), 4), Edge::new(id(4), 2)], v.edges());
        assert_eq!(0, v.remove_edges_to(id(2)));
    }

    #[test]
    fn display() {
        let mut v = Vertex::new(id(7), ());
        assert_eq!("[7]", v.to_string());
        v.add_edge(id(2), 3);
        v.add_edge(id(9), 1);
        assert_eq!("[7] -> [2], [9]", v.to_string());
        assert_eq!("[7]", VertexHandle::new(id(7)).to_string());
    }
}
