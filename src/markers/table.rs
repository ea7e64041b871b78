//! Known mutation signatures, in lookup order

/// A marker subsequence and the gene mutation it signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRecord {
    pub sequence: &'static str,
    pub gene_name: &'static str,
    pub mutation_code: &'static str,
    pub disorder_name: &'static str,
}

/// Reference markers. Order matters: detection reports the first hit.
pub static MARKERS: [MarkerRecord; 5] = [
    MarkerRecord {
        sequence: "AGGAGCTGAGCCGAGCCCGGAGGCAGGAGCAGAGC",
        gene_name: "BRCA1",
        mutation_code: "185delAG",
        disorder_name: "Breast cancer",
    },
    MarkerRecord {
        sequence: "ATCTTTGGTGTTTCCCTTGCTATGATTTGTCCAGTTTCTCCTGGATGTGCTGTCCTGGCCTCAGTGATGATAGGCAAG",
        gene_name: "CFTR",
        mutation_code: "F508del",
        disorder_name: "Cystic fibrosis",
    },
    MarkerRecord {
        sequence: "ATGGTGCACCTGACTCCTGAGGAGAAGTCTGCCGTTTACTGAA",
        gene_name: "HBB",
        mutation_code: "HbS",
        disorder_name: "Sickle cell disease",
    },
    MarkerRecord {
        sequence: "ATGCATGTCAGAGTGGAGTGAGGTCAGGAGGACAGGAGGA",
        gene_name: "TP53",
        mutation_code: "R248Q",
        disorder_name: "Li-Fraumeni syndrome",
    },
    MarkerRecord {
        sequence: "GAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAGTAG",
        gene_name: "PHEX",
        mutation_code: "D378Y",
        disorder_name: "X-linked hypophosphatemia",
    },
];
