//! Parcours d'un ring en segments consécutifs
//!
//! Le ring est fermé implicitement : si le dernier sommet diffère du
//! premier, un segment de fermeture est ajouté.

use crate::Geographic;

/// Itérateur de segments (P1, P2) sur un ring de sommets
pub struct Segments<I: Iterator<Item = Geographic>> {
    vertices: I,
    first: Option<Geographic>,
    previous: Option<Geographic>,
    /// Sommets distincts rencontrés, plafonnés à `DISTINCT_LIMIT`
    distinct: Vec<Geographic>,
    closed: bool,
}

/// Au-delà de 3 sommets distincts, le ring n'est plus dégénéré
const DISTINCT_LIMIT: usize = 3;

impl<I: Iterator<Item = Geographic>> Segments<I> {
    pub fn new<R: IntoIterator<IntoIter = I>>(ring: R) -> Self {
        Self {
            vertices: ring.into_iter(),
            first: None,
            previous: None,
            distinct: Vec::with_capacity(DISTINCT_LIMIT),
            closed: false,
        }
    }

    /// Nombre de sommets distincts vus jusqu'ici, plafonné à 3.
    ///
    /// Chaque sommet est comparé à tous ceux déjà vus : la fermeture
    /// explicite et les allers-retours (A, B, A, B) ne comptent pas.
    pub fn distinct_vertices(&self) -> usize {
        self.distinct.len()
    }

    fn record(&mut self, vertex: Geographic) {
        if self.distinct.len() < DISTINCT_LIMIT && !self.distinct.contains(&vertex) {
            self.distinct.push(vertex);
        }
    }
}

impl<I: Iterator<Item = Geographic>> Iterator for Segments<I> {
    type Item = (Geographic, Geographic);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.vertices.next() {
                Some(vertex) => {
                    self.record(vertex);
                    let Some(previous) = self.previous.replace(vertex) else {
                        self.first = Some(vertex);
                        continue;
                    };
                    return Some((previous, vertex));
                }
                None => {
                    if self.closed {
                        return None;
                    }
                    self.closed = true;
                    let (first, last) = (self.first?, self.previous?);
                    return (first != last).then_some((last, first));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(points: &[(f64, f64)]) -> Vec<Geographic> {
        points
            .iter()
            .map(|&(lon, lat)| Geographic::from_degrees(lon, lat))
            .collect()
    }

    #[test]
    fn test_implicit_closure() {
        let ring = deg(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let mut segments = Segments::new(ring.clone());
        let all: Vec<_> = segments.by_ref().collect();

        assert_eq!(all.len(), 3);
        assert_eq!(all[2], (ring[2], ring[0]));
        assert_eq!(segments.distinct_vertices(), 3);
    }

    #[test]
    fn test_explicit_closure() {
        let ring = deg(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);

        let mut segments = Segments::new(ring);
        assert_eq!(segments.by_ref().count(), 3);
        assert_eq!(segments.distinct_vertices(), 3);
    }

    #[test]
    fn test_duplicates_not_counted() {
        let ring = deg(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
        let mut segments = Segments::new(ring);
        segments.by_ref().for_each(drop);
        assert_eq!(segments.distinct_vertices(), 2);
    }

    #[test]
    fn test_back_and_forth_counts_two() {
        let ring = deg(&[(2.0, 48.0), (7.3, 51.7), (2.0, 48.0), (7.3, 51.7)]);
        let mut segments = Segments::new(ring);
        assert_eq!(segments.by_ref().count(), 4);
        assert_eq!(segments.distinct_vertices(), 2);
    }

    #[test]
    fn test_distinct_count_capped() {
        let ring = deg(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 2.0)]);
        let mut segments = Segments::new(ring);
        segments.by_ref().for_each(drop);
        assert_eq!(segments.distinct_vertices(), 3);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(Segments::new(Vec::<Geographic>::new()).count(), 0);

        let mut single = Segments::new(deg(&[(3.0, 4.0)]));
        assert_eq!(single.by_ref().count(), 0);
        assert_eq!(single.distinct_vertices(), 1);
    }
}
