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

/// Edge weight. Signed so that negative input can be detected and rejected.
pub type Weight = i64;

/// Identity of a vertex, unique within one graph for the graph's lifetime.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, Deserialize, Serialize, Debug)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        VertexId(id)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric form of the "no distance" sentinel, for callers that want a plain integer.
/// The typed API reports the same condition as `None`.
pub const NO_DISTANCE: Weight = -1;

pub const WEIGHT_ZERO: Weight = 0;

/// The first id handed out by a fresh generator.
pub const FIRST_VERTEX_ID: usize = 1;

/// Converts an optional distance into its numeric form, `NO_DISTANCE` standing in for `None`.
pub fn distance_or_sentinel(distance: Option<Weight>) -> Weight {
    distance.unwrap_or(NO_DISTANCE)
}
