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

use std::sync::{Mutex, PoisonError};

use crate::constants::{VertexId, FIRST_VERTEX_ID};

/// Hands out strictly increasing vertex ids. Ids are never reused, even after the
/// vertex they named has been removed.
///
/// Allocation is serialized through a mutex so a generator can be shared between
/// threads.
#[derive(Debug)]
pub struct IdGenerator {
    next: Mutex<usize>,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator {
            next: Mutex::new(FIRST_VERTEX_ID),
        }
    }

    pub fn next_id(&self) -> VertexId {
        // the counter is never left half-written, so a poisoned lock still holds a valid value
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let id = *next;
        *next += 1;
        VertexId::new(id)
    }

    /// The id the next call to `next_id` will return.
    #[cfg(test)]
    fn peek(&self) -> VertexId {
        VertexId::new(*self.next.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn ids_increase() {
        let generator = IdGenerator::new();
        assert_eq!(VertexId::new(FIRST_VERTEX_ID), generator.peek());
        let a = generator.next_id();
        let b = generator.next_id();
        let c = generator.next_id();
        assert!(a < b && b < c);
        assert_eq!(c.value() + 1, generator.peek().value());
    }

    #[test]
    fn generators_are_independent() {
        let first = IdGenerator::new();
        let second = IdGenerator::new();
        first.next_id();
        first.next_id();
        assert_eq!(VertexId::new(FIRST_VERTEX_ID), second.next_id());
    }

    #[test]
    fn concurrent_allocation_is_unique() {
        let generator = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || (0..500).map(|_| generator.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            let ids = handle.join().unwrap();
            // ids seen by a single thread must still be increasing
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            for id in ids {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(8 * 500, seen.len());
        assert_eq!(FIRST_VERTEX_ID + 8 * 500, generator.peek().value());
    }
}
