use super::Cpu;

// --- CB-Prefixed Implementations ---
// One executor per table slot; the shift/bit helpers in cpu/mod.rs do
// the actual work and own the flag updates.
impl Cpu {
    // RLC r / RLC (HL)
    cb_unary!(cb_rlc_b: rlc, b);
    cb_unary!(cb_rlc_c: rlc, c);
    cb_unary!(cb_rlc_d: rlc, d);
    cb_unary!(cb_rlc_e: rlc, e);
    cb_unary!(cb_rlc_h: rlc, h);
    cb_unary!(cb_rlc_l: rlc, l);
    cb_unary!(cb_rlc_hlp: rlc, hlp);
    cb_unary!(cb_rlc_a: rlc, a);

    // RRC r / RRC (HL)
    cb_unary!(cb_rrc_b: rrc, b);
    cb_unary!(cb_rrc_c: rrc, c);
    cb_unary!(cb_rrc_d: rrc, d);
    cb_unary!(cb_rrc_e: rrc, e);
    cb_unary!(cb_rrc_h: rrc, h);
    cb_unary!(cb_rrc_l: rrc, l);
    cb_unary!(cb_rrc_hlp: rrc, hlp);
    cb_unary!(cb_rrc_a: rrc, a);

    // RL r / RL (HL)
    cb_unary!(cb_rl_b: rl, b);
    cb_unary!(cb_rl_c: rl, c);
    cb_unary!(cb_rl_d: rl, d);
    cb_unary!(cb_rl_e: rl, e);
    cb_unary!(cb_rl_h: rl, h);
    cb_unary!(cb_rl_l: rl, l);
    cb_unary!(cb_rl_hlp: rl, hlp);
    cb_unary!(cb_rl_a: rl, a);

    // RR r / RR (HL)
    cb_unary!(cb_rr_b: rr, b);
    cb_unary!(cb_rr_c: rr, c);
    cb_unary!(cb_rr_d: rr, d);
    cb_unary!(cb_rr_e: rr, e);
    cb_unary!(cb_rr_h: rr, h);
    cb_unary!(cb_rr_l: rr, l);
    cb_unary!(cb_rr_hlp: rr, hlp);
    cb_unary!(cb_rr_a: rr, a);

    // SLA r / SLA (HL)
    cb_unary!(cb_sla_b: sla, b);
    cb_unary!(cb_sla_c: sla, c);
    cb_unary!(cb_sla_d: sla, d);
    cb_unary!(cb_sla_e: sla, e);
    cb_unary!(cb_sla_h: sla, h);
    cb_unary!(cb_sla_l: sla, l);
    cb_unary!(cb_sla_hlp: sla, hlp);
    cb_unary!(cb_sla_a: sla, a);

    // SRA r / SRA (HL)
    cb_unary!(cb_sra_b: sra, b);
    cb_unary!(cb_sra_c: sra, c);
    cb_unary!(cb_sra_d: sra, d);
    cb_unary!(cb_sra_e: sra, e);
    cb_unary!(cb_sra_h: sra, h);
    cb_unary!(cb_sra_l: sra, l);
    cb_unary!(cb_sra_hlp: sra, hlp);
    cb_unary!(cb_sra_a: sra, a);

    // SWAP r / SWAP (HL)
    cb_unary!(cb_swap_b: swap, b);
    cb_unary!(cb_swap_c: swap, c);
    cb_unary!(cb_swap_d: swap, d);
    cb_unary!(cb_swap_e: swap, e);
    cb_unary!(cb_swap_h: swap, h);
    cb_unary!(cb_swap_l: swap, l);
    cb_unary!(cb_swap_hlp: swap, hlp);
    cb_unary!(cb_swap_a: swap, a);

    // SRL r / SRL (HL)
    cb_unary!(cb_srl_b: srl, b);
    cb_unary!(cb_srl_c: srl, c);
    cb_unary!(cb_srl_d: srl, d);
    cb_unary!(cb_srl_e: srl, e);
    cb_unary!(cb_srl_h: srl, h);
    cb_unary!(cb_srl_l: srl, l);
    cb_unary!(cb_srl_hlp: srl, hlp);
    cb_unary!(cb_srl_a: srl, a);

    // BIT 0, r / BIT 0, (HL)
    cb_bit!(cb_bit_0_b: 0, b);
    cb_bit!(cb_bit_0_c: 0, c);
    cb_bit!(cb_bit_0_d: 0, d);
    cb_bit!(cb_bit_0_e: 0, e);
    cb_bit!(cb_bit_0_h: 0, h);
    cb_bit!(cb_bit_0_l: 0, l);
    cb_bit!(cb_bit_0_hlp: 0, hlp);
    cb_bit!(cb_bit_0_a: 0, a);

    // BIT 1, r / BIT 1, (HL)
    cb_bit!(cb_bit_1_b: 1, b);
    cb_bit!(cb_bit_1_c: 1, c);
    cb_bit!(cb_bit_1_d: 1, d);
    cb_bit!(cb_bit_1_e: 1, e);
    cb_bit!(cb_bit_1_h: 1, h);
    cb_bit!(cb_bit_1_l: 1, l);
    cb_bit!(cb_bit_1_hlp: 1, hlp);
    cb_bit!(cb_bit_1_a: 1, a);

    // BIT 2, r / BIT 2, (HL)
    cb_bit!(cb_bit_2_b: 2, b);
    cb_bit!(cb_bit_2_c: 2, c);
    cb_bit!(cb_bit_2_d: 2, d);
    cb_bit!(cb_bit_2_e: 2, e);
    cb_bit!(cb_bit_2_h: 2, h);
    cb_bit!(cb_bit_2_l: 2, l);
    cb_bit!(cb_bit_2_hlp: 2, hlp);
    cb_bit!(cb_bit_2_a: 2, a);

    // BIT 3, r / BIT 3, (HL)
    cb_bit!(cb_bit_3_b: 3, b);
    cb_bit!(cb_bit_3_c: 3, c);
    cb_bit!(cb_bit_3_d: 3, d);
    cb_bit!(cb_bit_3_e: 3, e);
    cb_bit!(cb_bit_3_h: 3, h);
    cb_bit!(cb_bit_3_l: 3, l);
    cb_bit!(cb_bit_3_hlp: 3, hlp);
    cb_bit!(cb_bit_3_a: 3, a);

    // BIT 4, r / BIT 4, (HL)
    cb_bit!(cb_bit_4_b: 4, b);
    cb_bit!(cb_bit_4_c: 4, c);
    cb_bit!(cb_bit_4_d: 4, d);
    cb_bit!(cb_bit_4_e: 4, e);
    cb_bit!(cb_bit_4_h: 4, h);
    cb_bit!(cb_bit_4_l: 4, l);
    cb_bit!(cb_bit_4_hlp: 4, hlp);
    cb_bit!(cb_bit_4_a: 4, a);

    // BIT 5, r / BIT 5, (HL)
    cb_bit!(cb_bit_5_b: 5, b);
    cb_bit!(cb_bit_5_c: 5, c);
    cb_bit!(cb_bit_5_d: 5, d);
    cb_bit!(cb_bit_5_e: 5, e);
    cb_bit!(cb_bit_5_h: 5, h);
    cb_bit!(cb_bit_5_l: 5, l);
    cb_bit!(cb_bit_5_hlp: 5, hlp);
    cb_bit!(cb_bit_5_a: 5, a);

    // BIT 6, r / BIT 6, (HL)
    cb_bit!(cb_bit_6_b: 6, b);
    cb_bit!(cb_bit_6_c: 6, c);
    cb_bit!(cb_bit_6_d: 6, d);
    cb_bit!(cb_bit_6_e: 6, e);
    cb_bit!(cb_bit_6_h: 6, h);
    cb_bit!(cb_bit_6_l: 6, l);
    cb_bit!(cb_bit_6_hlp: 6, hlp);
    cb_bit!(cb_bit_6_a: 6, a);

    // BIT 7, r / BIT 7, (HL)
    cb_bit!(cb_bit_7_b: 7, b);
    cb_bit!(cb_bit_7_c: 7, c);
    cb_bit!(cb_bit_7_d: 7, d);
    cb_bit!(cb_bit_7_e: 7, e);
    cb_bit!(cb_bit_7_h: 7, h);
    cb_bit!(cb_bit_7_l: 7, l);
    cb_bit!(cb_bit_7_hlp: 7, hlp);
    cb_bit!(cb_bit_7_a: 7, a);

    // RES 0, r / RES 0, (HL)
    cb_res!(cb_res_0_b: 0, b);
    cb_res!(cb_res_0_c: 0, c);
    cb_res!(cb_res_0_d: 0, d);
    cb_res!(cb_res_0_e: 0, e);
    cb_res!(cb_res_0_h: 0, h);
    cb_res!(cb_res_0_l: 0, l);
    cb_res!(cb_res_0_hlp: 0, hlp);
    cb_res!(cb_res_0_a: 0, a);

    // RES 1, r / RES 1, (HL)
    cb_res!(cb_res_1_b: 1, b);
    cb_res!(cb_res_1_c: 1, c);
    cb_res!(cb_res_1_d: 1, d);
    cb_res!(cb_res_1_e: 1, e);
    cb_res!(cb_res_1_h: 1, h);
    cb_res!(cb_res_1_l: 1, l);
    cb_res!(cb_res_1_hlp: 1, hlp);
    cb_res!(cb_res_1_a: 1, a);

    // RES 2, r / RES 2, (HL)
    cb_res!(cb_res_2_b: 2, b);
    cb_res!(cb_res_2_c: 2, c);
    cb_res!(cb_res_2_d: 2, d);
    cb_res!(cb_res_2_e: 2, e);
    cb_res!(cb_res_2_h: 2, h);
    cb_res!(cb_res_2_l: 2, l);
    cb_res!(cb_res_2_hlp: 2, hlp);
    cb_res!(cb_res_2_a: 2, a);

    // RES 3, r / RES 3, (HL)
    cb_res!(cb_res_3_b: 3, b);
    cb_res!(cb_res_3_c: 3, c);
    cb_res!(cb_res_3_d: 3, d);
    cb_res!(cb_res_3_e: 3, e);
    cb_res!(cb_res_3_h: 3, h);
    cb_res!(cb_res_3_l: 3, l);
    cb_res!(cb_res_3_hlp: 3, hlp);
    cb_res!(cb_res_3_a: 3, a);

    // RES 4, r / RES 4, (HL)
    cb_res!(cb_res_4_b: 4, b);
    cb_res!(cb_res_4_c: 4, c);
    cb_res!(cb_res_4_d: 4, d);
    cb_res!(cb_res_4_e: 4, e);
    cb_res!(cb_res_4_h: 4, h);
    cb_res!(cb_res_4_l: 4, l);
    cb_res!(cb_res_4_hlp: 4, hlp);
    cb_res!(cb_res_4_a: 4, a);

    // RES 5, r / RES 5, (HL)
    cb_res!(cb_res_5_b: 5, b);
    cb_res!(cb_res_5_c: 5, c);
    cb_res!(cb_res_5_d: 5, d);
    cb_res!(cb_res_5_e: 5, e);
    cb_res!(cb_res_5_h: 5, h);
    cb_res!(cb_res_5_l: 5, l);
    cb_res!(cb_res_5_hlp: 5, hlp);
    cb_res!(cb_res_5_a: 5, a);

    // RES 6, r / RES 6, (HL)
    cb_res!(cb_res_6_b: 6, b);
    cb_res!(cb_res_6_c: 6, c);
    cb_res!(cb_res_6_d: 6, d);
    cb_res!(cb_res_6_e: 6, e);
    cb_res!(cb_res_6_h: 6, h);
    cb_res!(cb_res_6_l: 6, l);
    cb_res!(cb_res_6_hlp: 6, hlp);
    cb_res!(cb_res_6_a: 6, a);

    // RES 7, r / RES 7, (HL)
    cb_res!(cb_res_7_b: 7, b);
    cb_res!(cb_res_7_c: 7, c);
    cb_res!(cb_res_7_d: 7, d);
    cb_res!(cb_res_7_e: 7, e);
    cb_res!(cb_res_7_h: 7, h);
    cb_res!(cb_res_7_l: 7, l);
    cb_res!(cb_res_7_hlp: 7, hlp);
    cb_res!(cb_res_7_a: 7, a);

    // SET 0, r / SET 0, (HL)
    cb_set!(cb_set_0_b: 0, b);
    cb_set!(cb_set_0_c: 0, c);
    cb_set!(cb_set_0_d: 0, d);
    cb_set!(cb_set_0_e: 0, e);
    cb_set!(cb_set_0_h: 0, h);
    cb_set!(cb_set_0_l: 0, l);
    cb_set!(cb_set_0_hlp: 0, hlp);
    cb_set!(cb_set_0_a: 0, a);

    // SET 1, r / SET 1, (HL)
    cb_set!(cb_set_1_b: 1, b);
    cb_set!(cb_set_1_c: 1, c);
    cb_set!(cb_set_1_d: 1, d);
    cb_set!(cb_set_1_e: 1, e);
    cb_set!(cb_set_1_h: 1, h);
    cb_set!(cb_set_1_l: 1, l);
    cb_set!(cb_set_1_hlp: 1, hlp);
    cb_set!(cb_set_1_a: 1, a);

    // SET 2, r / SET 2, (HL)
    cb_set!(cb_set_2_b: 2, b);
    cb_set!(cb_set_2_c: 2, c);
    cb_set!(cb_set_2_d: 2, d);
    cb_set!(cb_set_2_e: 2, e);
    cb_set!(cb_set_2_h: 2, h);
    cb_set!(cb_set_2_l: 2, l);
    cb_set!(cb_set_2_hlp: 2, hlp);
    cb_set!(cb_set_2_a: 2, a);

    // SET 3, r / SET 3, (HL)
    cb_set!(cb_set_3_b: 3, b);
    cb_set!(cb_set_3_c: 3, c);
    cb_set!(cb_set_3_d: 3, d);
    cb_set!(cb_set_3_e: 3, e);
    cb_set!(cb_set_3_h: 3, h);
    cb_set!(cb_set_3_l: 3, l);
    cb_set!(cb_set_3_hlp: 3, hlp);
    cb_set!(cb_set_3_a: 3, a);

    // SET 4, r / SET 4, (HL)
    cb_set!(cb_set_4_b: 4, b);
    cb_set!(cb_set_4_c: 4, c);
    cb_set!(cb_set_4_d: 4, d);
    cb_set!(cb_set_4_e: 4, e);
    cb_set!(cb_set_4_h: 4, h);
    cb_set!(cb_set_4_l: 4, l);
    cb_set!(cb_set_4_hlp: 4, hlp);
    cb_set!(cb_set_4_a: 4, a);

    // SET 5, r / SET 5, (HL)
    cb_set!(cb_set_5_b: 5, b);
    cb_set!(cb_set_5_c: 5, c);
    cb_set!(cb_set_5_d: 5, d);
    cb_set!(cb_set_5_e: 5, e);
    cb_set!(cb_set_5_h: 5, h);
    cb_set!(cb_set_5_l: 5, l);
    cb_set!(cb_set_5_hlp: 5, hlp);
    cb_set!(cb_set_5_a: 5, a);

    // SET 6, r / SET 6, (HL)
    cb_set!(cb_set_6_b: 6, b);
    cb_set!(cb_set_6_c: 6, c);
    cb_set!(cb_set_6_d: 6, d);
    cb_set!(cb_set_6_e: 6, e);
    cb_set!(cb_set_6_h: 6, h);
    cb_set!(cb_set_6_l: 6, l);
    cb_set!(cb_set_6_hlp: 6, hlp);
    cb_set!(cb_set_6_a: 6, a);

    // SET 7, r / SET 7, (HL)
    cb_set!(cb_set_7_b: 7, b);
    cb_set!(cb_set_7_c: 7, c);
    cb_set!(cb_set_7_d: 7, d);
    cb_set!(cb_set_7_e: 7, e);
    cb_set!(cb_set_7_h: 7, h);
    cb_set!(cb_set_7_l: 7, l);
    cb_set!(cb_set_7_hlp: 7, hlp);
    cb_set!(cb_set_7_a: 7, a);
}
