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
use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::constants::{distance_or_sentinel, Weight, WEIGHT_ZERO};
use crate::error::{GraphError, Result};
use crate::vertex::VertexHandle;

/// One step of a path: the vertex it arrives at and the weight of the edge taken.
#[derive(Eq, PartialEq, Clone, Copy, Deserialize, Serialize, Debug)]
pub struct PathEdge {
    pub target: VertexHandle,
    pub weight: Weight,
}

impl PathEdge {
    pub fn new(target: VertexHandle, weight: Weight) -> Self {
        PathEdge { target, weight }
    }
}

impl fmt::Display for PathEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "->{} {}", self.weight, self.target)
    }
}

/// The edges of a route starting at `origin`, in traversal order.
///
/// A path either reaches its destination, in which case `distance()` is the sum of its
/// edge weights, or it is unreachable and `distance()` is `None`. A reached path without
/// edges is the trivial path from a vertex to itself.
#[derive(Eq, PartialEq, Clone, Deserialize, Serialize, Debug)]
pub struct Path {
    origin: VertexHandle,
    edges: Vec<PathEdge>,
    distance: Option<Weight>,
}

impl Path {
    /// The trivial path that starts and ends at `origin`.
    pub fn new(origin: VertexHandle) -> Self {
        Path {
            origin,
            edges: vec![],
            distance: Some(WEIGHT_ZERO),
        }
    }

    pub fn unreachable(origin: VertexHandle) -> Self {
        Path {
            origin,
            edges: vec![],
            distance: None,
        }
    }

    /// Appends an edge. Negative weights and a total that no longer fits in `Weight` are
    /// rejected and leave the path unchanged.
    pub fn push(&mut self, edge: PathEdge) -> Result<()> {
        if edge.weight < WEIGHT_ZERO {
            return Err(GraphError::InvalidWeight(edge.weight));
        }
        let previous = self.distance.unwrap_or(WEIGHT_ZERO);
        let distance = previous
            .checked_add(edge.weight)
            .ok_or(GraphError::DistanceOverflow(edge.weight))?;
        self.distance = Some(distance);
        self.edges.push(edge);
        Ok(())
    }

    /// A copy of this path extended by `edge`.
    pub fn extended(&self, edge: PathEdge) -> Result<Path> {
        let mut path = self.clone();
        path.push(edge)?;
        Ok(path)
    }

    pub fn origin(&self) -> VertexHandle {
        self.origin
    }

    /// The total weight, or `None` if the path is unreachable.
    pub fn distance(&self) -> Option<Weight> {
        self.distance
    }

    /// The total weight with `NO_DISTANCE` standing in for an unreachable path.
    pub fn distance_or_sentinel(&self) -> Weight {
        distance_or_sentinel(self.distance)
    }

    pub fn is_found(&self) -> bool {
        self.distance.is_some()
    }

    /// The target of the last edge, or `None` if the path has no edges.
    pub fn destination(&self) -> Option<VertexHandle> {
        self.edges.last().map(|e| e.target)
    }

    pub fn edges(&self) -> impl Iterator<Item = &PathEdge> + '_ {
        self.edges.iter()
    }

    /// Visits the edges in traversal order until `visit` breaks.
    pub fn visit_edges<F>(&self, mut visit: F)
    where
        F: FnMut(VertexHandle, Weight) -> ControlFlow<()>,
    {
        for e in &self.edges {
            if visit(e.target, e.weight).is_break() {
                break;
            }
        }
    }

    /// The vertices visited after leaving the origin, in order.
    pub fn vertices(&self) -> Vec<VertexHandle> {
        self.edges.iter().map(|e| e.target).collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}
