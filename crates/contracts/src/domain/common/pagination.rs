//! Generic client-side pagination over an already-filtered list.

/// Pure page slice `[page*taille, (page+1)*taille)`.
pub fn paginer<T: Clone>(items: &[T], page: usize, taille_page: usize) -> Vec<T> {
    if taille_page == 0 {
        return Vec::new();
    }
    items
        .iter()
        .skip(page.saturating_mul(taille_page))
        .take(taille_page)
        .cloned()
        .collect()
}

/// Clamp a remembered page index to the last existing page. A refetch or a
/// filter change can shrink the list under the user; without the clamp the
/// screen would show an empty page while rows still exist.
pub fn borner_page(nombre_elements: usize, page: usize, taille_page: usize) -> usize {
    if taille_page == 0 || nombre_elements == 0 {
        return 0;
    }
    let derniere_page = nombre_elements.div_ceil(taille_page) - 1;
    page.min(derniere_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_par_tranches() {
        let nombres: Vec<i32> = (0..25).collect();
        assert_eq!(paginer(&nombres, 0, 10), (0..10).collect::<Vec<_>>());
        assert_eq!(paginer(&nombres, 2, 10), (20..25).collect::<Vec<_>>());
        assert!(paginer(&nombres, 3, 10).is_empty());
        assert!(paginer(&nombres, 0, 0).is_empty());
    }

    #[test]
    fn page_bornee_a_la_derniere_page() {
        // 25 items, 10 per page -> last page index is 2.
        assert_eq!(borner_page(25, 0, 10), 0);
        assert_eq!(borner_page(25, 2, 10), 2);
        assert_eq!(borner_page(25, 7, 10), 2);
    }

    #[test]
    fn page_bornee_apres_retrecissement_de_la_liste() {
        // User sat on page 4; the refetched list only fills one page.
        let page = borner_page(8, 4, 10);
        assert_eq!(page, 0);
        let nombres: Vec<i32> = (0..8).collect();
        assert_eq!(paginer(&nombres, page, 10).len(), 8);
    }

    #[test]
    fn page_bornee_cas_limites() {
        assert_eq!(borner_page(0, 3, 10), 0);
        assert_eq!(borner_page(10, 3, 0), 0);
        // Exactly full pages: 20 items / 10 -> last page index 1.
        assert_eq!(borner_page(20, 2, 10), 1);
    }
}
