// src/dag/graph.rs

use std::collections::{BTreeSet, HashMap};

use crate::errors::{CourseplanError, Result};
use crate::types::CourseId;

/// Internal vertex record: adjacency in both directions plus degree counters.
#[derive(Debug, Clone, Default)]
struct VertexEntry {
    /// Insertion sequence number; used for stable iteration and tie-breaks.
    seq: u64,
    /// Courses this one is a prerequisite of (`self -> v`).
    successors: BTreeSet<CourseId>,
    /// Courses that are prerequisites of this one (`u -> self`).
    predecessors: BTreeSet<CourseId>,
    in_degree: usize,
    out_degree: usize,
}

/// Adjacency-list directed graph keyed by course id.
///
/// An edge `u -> v` means "u is a prerequisite of v". Degree counters are
/// kept in step with the edge sets by every mutating operation.
///
/// Constructing from a sequence with repeated ids keeps the first
/// occurrence and ignores the rest.
#[derive(Debug, Clone, Default)]
pub struct CourseGraph {
    vertices: HashMap<CourseId, VertexEntry>,
    next_seq: u64,
}

impl CourseGraph {
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CourseId>,
    {
        let mut graph = Self::default();
        for v in vertices {
            graph.add_vertex(v.into());
        }
        graph
    }

    /// Add `u` with zero degree. No-op when `u` is already a vertex.
    pub fn add_vertex(&mut self, u: CourseId) {
        if self.vertices.contains_key(&u) {
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.vertices.insert(
            u,
            VertexEntry {
                seq,
                ..VertexEntry::default()
            },
        );
    }

    /// Insert the edge `u -> v`. Adding an existing edge changes nothing.
    pub fn add_edge(&mut self, u: &CourseId, v: &CourseId) -> Result<()> {
        self.ensure_vertex(u)?;
        self.ensure_vertex(v)?;

        let inserted = self.entry_mut(u)?.successors.insert(v.clone());
        if !inserted {
            return Ok(());
        }
        self.entry_mut(u)?.out_degree += 1;

        let target = self.entry_mut(v)?;
        target.predecessors.insert(u.clone());
        target.in_degree += 1;
        Ok(())
    }

    /// Remove the edge `u -> v`.
    pub fn remove_edge(&mut self, u: &CourseId, v: &CourseId) -> Result<()> {
        self.ensure_vertex(u)?;
        self.ensure_vertex(v)?;

        let removed = self.entry_mut(u)?.successors.remove(v);
        if !removed {
            return Err(CourseplanError::UnknownEdge {
                from: u.clone(),
                to: v.clone(),
            });
        }
        self.entry_mut(u)?.out_degree -= 1;

        let target = self.entry_mut(v)?;
        target.predecessors.remove(u);
        target.in_degree -= 1;
        Ok(())
    }

    /// Remove `u` and every edge touching it, updating neighbour counters.
    pub fn remove_vertex(&mut self, u: &CourseId) -> Result<()> {
        let entry = self
            .vertices
            .remove(u)
            .ok_or_else(|| CourseplanError::UnknownVertex(u.clone()))?;

        for succ in &entry.successors {
            if let Some(s) = self.vertices.get_mut(succ) {
                s.predecessors.remove(u);
                s.in_degree -= 1;
            }
        }
        for pred in &entry.predecessors {
            if let Some(p) = self.vertices.get_mut(pred) {
                p.successors.remove(u);
                p.out_degree -= 1;
            }
        }
        Ok(())
    }

    /// Direct successors of `u` (the courses `u` is a prerequisite of).
    pub fn edges_from(&self, u: &CourseId) -> Result<&BTreeSet<CourseId>> {
        Ok(&self.entry(u)?.successors)
    }

    pub fn in_degree_of(&self, u: &CourseId) -> Result<usize> {
        Ok(self.entry(u)?.in_degree)
    }

    pub fn out_degree_of(&self, u: &CourseId) -> Result<usize> {
        Ok(self.entry(u)?.out_degree)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|e| e.out_degree).sum()
    }

    pub fn contains_vertex(&self, u: &CourseId) -> bool {
        self.vertices.contains_key(u)
    }

    pub fn contains_edge(&self, u: &CourseId, v: &CourseId) -> bool {
        self.vertices
            .get(u)
            .is_some_and(|e| e.successors.contains(v))
    }

    /// Insertion sequence number of `u`, if present.
    pub fn position_of(&self, u: &CourseId) -> Option<u64> {
        self.vertices.get(u).map(|e| e.seq)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> Vec<&CourseId> {
        let mut ordered: Vec<(&CourseId, u64)> =
            self.vertices.iter().map(|(k, e)| (k, e.seq)).collect();
        ordered.sort_by_key(|(_, seq)| *seq);
        ordered.into_iter().map(|(k, _)| k).collect()
    }

    /// Every edge `(u, v)`, sources in insertion order.
    pub fn edges(&self) -> Vec<(&CourseId, &CourseId)> {
        self.vertices()
            .into_iter()
            .flat_map(|u| self.vertices[u].successors.iter().map(move |v| (u, v)))
            .collect()
    }

    fn ensure_vertex(&self, u: &CourseId) -> Result<()> {
        self.entry(u).map(|_| ())
    }

    fn entry(&self, u: &CourseId) -> Result<&VertexEntry> {
        self.vertices
            .get(u)
            .ok_or_else(|| CourseplanError::UnknownVertex(u.clone()))
    }

    fn entry_mut(&mut self, u: &CourseId) -> Result<&mut VertexEntry> {
        self.vertices
            .get_mut(u)
            .ok_or_else(|| CourseplanError::UnknownVertex(u.clone()))
    }
}
