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

use std::cmp::Ordering;

use priority_queue::PriorityQueue;

use crate::constants::{VertexId, Weight};

/// A tentative distance as seen by the queue. `None` (no distance known yet) ranks below
/// every finite distance, and among finite distances the smaller one ranks higher, so
/// the max-queue underneath pops the closest vertex first.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
struct Tentative(Option<Weight>);

impl Ord for Tentative {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => b.cmp(&a),
        }
    }
}

impl PartialOrd for Tentative {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-queue of vertices keyed by tentative distance with decrease-key. The underlying
/// heap keeps an item index, so `update` is logarithmic.
#[derive(Debug)]
pub struct DistanceQueue {
    queue: PriorityQueue<VertexId, Tentative>,
}

impl DistanceQueue {
    pub fn new() -> Self {
        DistanceQueue {
            queue: PriorityQueue::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DistanceQueue {
            queue: PriorityQueue::with_capacity(capacity),
        }
    }

    /// Inserts `vertex`, or overwrites its distance if it is already queued.
    pub fn push(&mut self, vertex: VertexId, distance: Option<Weight>) {
        self.queue.push(vertex, Tentative(distance));
    }

    /// Removes the vertex with the smallest distance. Vertices without a distance come
    /// out only after every vertex that has one.
    pub fn pop_min(&mut self) -> Option<(VertexId, Option<Weight>)> {
        self.queue.pop().map(|(vertex, t)| (vertex, t.0))
    }

    /// Changes the distance of a queued vertex and restores heap order. Returns false if
    /// `vertex` is not in the queue.
    pub fn update(&mut self, vertex: VertexId, distance: Option<Weight>) -> bool {
        self.queue
            .change_priority(&vertex, Tentative(distance))
            .is_some()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.queue.get_priority(&vertex).is_some()
    }

    /// The current distance of a queued vertex; the outer `None` means not queued.
    pub fn distance(&self, vertex: VertexId) -> Option<Option<Weight>> {
        self.queue.get_priority(&vertex).map(|t| t.0)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for DistanceQueue {
    fn default() -> Self {
        Self::new()
    }
}
