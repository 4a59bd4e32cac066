//! DVI opcode values.

pub const SET_CHAR_0: u8 = 0;
pub const SET_CHAR_127: u8 = 127;
pub const SET1: u8 = 128;
pub const SET2: u8 = 129;
pub const SET3: u8 = 130;
pub const SET4: u8 = 131;
pub const SET_RULE: u8 = 132;
pub const PUT1: u8 = 133;
pub const PUT2: u8 = 134;
pub const PUT3: u8 = 135;
pub const PUT4: u8 = 136;
pub const PUT_RULE: u8 = 137;
pub const NOP: u8 = 138;
pub const BOP: u8 = 139;
pub const EOP: u8 = 140;
pub const PUSH: u8 = 141;
pub const POP: u8 = 142;
pub const RIGHT1: u8 = 143;
pub const RIGHT2: u8 = 144;
pub const RIGHT3: u8 = 145;
pub const RIGHT4: u8 = 146;
pub const W0: u8 = 147;
pub const W1: u8 = 148;
pub const W2: u8 = 149;
pub const W3: u8 = 150;
pub const W4: u8 = 151;
pub const X0: u8 = 152;
pub const X1: u8 = 153;
pub const X2: u8 = 154;
pub const X3: u8 = 155;
pub const X4: u8 = 156;
pub const DOWN1: u8 = 157;
pub const DOWN2: u8 = 158;
pub const DOWN3: u8 = 159;
pub const DOWN4: u8 = 160;
pub const Y0: u8 = 161;
pub const Y1: u8 = 162;
pub const Y2: u8 = 163;
pub const Y3: u8 = 164;
pub const Y4: u8 = 165;
pub const Z0: u8 = 166;
pub const Z1: u8 = 167;
pub const Z2: u8 = 168;
pub const Z3: u8 = 169;
pub const Z4: u8 = 170;
pub const FNT_NUM_0: u8 = 171;
pub const FNT_NUM_63: u8 = 234;
pub const FNT1: u8 = 235;
pub const FNT2: u8 = 236;
pub const FNT3: u8 = 237;
pub const FNT4: u8 = 238;
pub const XXX1: u8 = 239;
pub const XXX2: u8 = 240;
pub const XXX3: u8 = 241;
pub const XXX4: u8 = 242;
pub const FNT_DEF1: u8 = 243;
pub const FNT_DEF2: u8 = 244;
pub const FNT_DEF3: u8 = 245;
pub const FNT_DEF4: u8 = 246;
pub const PRE: u8 = 247;
pub const POST: u8 = 248;
pub const POST_POST: u8 = 249;

/// Operand width in bytes for the `n`-th member of a 1..4 family starting at `first`.
#[inline]
pub fn family_width(opcode: u8, first: u8) -> usize {
    usize::from(opcode - first) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_width() {
        assert_eq!(family_width(SET1, SET1), 1);
        assert_eq!(family_width(SET4, SET1), 4);
        assert_eq!(family_width(W1, W1), 1);
        assert_eq!(family_width(Z4, Z1), 4);
        assert_eq!(family_width(FNT_DEF4, FNT_DEF1), 4);
    }

    #[test]
    fn test_table_is_contiguous() {
        assert_eq!(FNT_NUM_63 - FNT_NUM_0, 63);
        assert_eq!(W0 + 5, X0);
        assert_eq!(Y0 + 5, Z0);
        assert_eq!(XXX4 + 1, FNT_DEF1);
        assert_eq!(POST_POST, 249);
    }
}
