pub(crate) mod thai {
    /// Thai marks that stack onto the preceding base and move with it.
    ///
    /// Hand-picked rather than derived from a Unicode property: U+0E36,
    /// U+0E3A and U+0E4E are left out on purpose. SARA AM (U+0E33) is
    /// included even though it takes up a column of its own.
    ///
    /// Kept sorted so lookups can binary search.
    pub(crate) static THAI_NON_BASE_CODES: [u16; 14] = [
        0x0E31, // MAI HAN-AKAT
        0x0E33, // SARA AM
        0x0E34, // SARA I
        0x0E35, // SARA II
        0x0E37, // SARA UEE
        0x0E38, // SARA U
        0x0E39, // SARA UU
        0x0E47, // MAITAIKHU
        0x0E48, // MAI EK
        0x0E49, // MAI THO
        0x0E4A, // MAI TRI
        0x0E4B, // MAI CHATTAWA
        0x0E4C, // THANTHAKHAT
        0x0E4D, // NIKHAHIT
    ];

    #[inline]
    pub(crate) fn is_non_base(unit: u16) -> bool {
        THAI_NON_BASE_CODES.binary_search(&unit).is_ok()
    }
}
