//! Screen-local state of the validation queue.

use contracts::domain::a001_compte::review::FiltreStatut;

/// Which modal is on screen. A single value makes the three action dialogs
/// mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogueActif {
    #[default]
    Aucun,
    Valider,
    LeverOpposition,
    Rejeter,
}

/// Filter and paging state of the list. Dropped when the tab closes, never
/// synced to the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct EtatListe {
    pub recherche: String,
    pub filtre: FiltreStatut,
    pub page: usize,
    pub taille_page: usize,
}

impl Default for EtatListe {
    fn default() -> Self {
        Self {
            recherche: String::new(),
            filtre: FiltreStatut::Tous,
            page: 0,
            taille_page: 25,
        }
    }
}

impl EtatListe {
    /// Any change of search or status filter re-anchors paging at page one.
    pub fn changer_recherche(&mut self, recherche: String) {
        self.recherche = recherche;
        self.page = 0;
    }

    pub fn changer_filtre(&mut self, filtre: FiltreStatut) {
        self.filtre = filtre;
        self.page = 0;
    }

    pub fn changer_taille_page(&mut self, taille: usize) {
        self.taille_page = taille;
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changer_filtre_revient_en_premiere_page() {
        let mut etat = EtatListe {
            page: 4,
            ..Default::default()
        };
        etat.changer_filtre(FiltreStatut::MiseEnOpposition);
        assert_eq!(etat.page, 0);
        assert_eq!(etat.filtre, FiltreStatut::MiseEnOpposition);
    }

    #[test]
    fn changer_recherche_revient_en_premiere_page() {
        let mut etat = EtatListe {
            page: 2,
            ..Default::default()
        };
        etat.changer_recherche("dupont".to_string());
        assert_eq!(etat.page, 0);
    }

    #[test]
    fn changer_taille_page_revient_en_premiere_page() {
        let mut etat = EtatListe {
            page: 9,
            ..Default::default()
        };
        etat.changer_taille_page(100);
        assert_eq!(etat.page, 0);
        assert_eq!(etat.taille_page, 100);
    }

    #[test]
    fn dialogue_par_defaut_est_aucun() {
        assert_eq!(DialogueActif::default(), DialogueActif::Aucun);
    }
}
