// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Standard terminfo capabilities
//!
//! The binary format stores standard capabilities positionally. The order of
//! the variants below is the order of the slots in a compiled entry, so the
//! discriminant of each variant is its index in the corresponding section.

macro_rules! capabilities {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = ($code:literal, $long:literal),)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum $name {
            $(
                #[doc = concat!("`", $code, "` (", $long, ")")]
                $variant,
            )*
        }

        impl $name {
            /// All capabilities of this kind, in file order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Position of the capability in its section
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Short capability code, as used in terminfo source files
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Long C variable name of the capability
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $long,)*
                }
            }

            /// Find the capability stored at `index`
            #[must_use]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            /// Find the capability by its short code
            #[must_use]
            pub fn from_code(code: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|cap| cap.code() == code)
            }
        }
    };
}

capabilities! {
    /// Standard boolean capabilities, in file order
    pub enum BooleanCapability {
        AutoLeftMargin = ("bw", "auto_left_margin"),
        AutoRightMargin = ("am", "auto_right_margin"),
        NoEscCtlc = ("xsb", "no_esc_ctlc"),
        CeolStandoutGlitch = ("xhp", "ceol_standout_glitch"),
        EatNewlineGlitch = ("xenl", "eat_newline_glitch"),
        EraseOverstrike = ("eo", "erase_overstrike"),
        GenericType = ("gn", "generic_type"),
        HardCopy = ("hc", "hard_copy"),
        HasMetaKey = ("km", "has_meta_key"),
        HasStatusLine = ("hs", "has_status_line"),
        InsertNullGlitch = ("in", "insert_null_glitch"),
        MemoryAbove = ("db", "memory_above"),
        MemoryBelow = ("da", "memory_below"),
        MoveInsertMode = ("mir", "move_insert_mode"),
        MoveStandoutMode = ("msgr", "move_standout_mode"),
        OverStrike = ("os", "over_strike"),
        StatusLineEscOk = ("eslok", "status_line_esc_ok"),
        DestTabsMagicSmso = ("xt", "dest_tabs_magic_smso"),
        TildeGlitch = ("hz", "tilde_glitch"),
        TransparentUnderline = ("ul", "transparent_underline"),
        XonXoff = ("xon", "xon_xoff"),
        NeedsXonXoff = ("nxon", "needs_xon_xoff"),
        PrtrSilent = ("mc5i", "prtr_silent"),
        HardCursor = ("chts", "hard_cursor"),
        NonRevRmcup = ("nrrmc", "non_rev_rmcup"),
        NoPadChar = ("npc", "no_pad_char"),
        NonDestScrollRegion = ("ndscr", "non_dest_scroll_region"),
        CanChange = ("ccc", "can_change"),
        BackColorErase = ("bce", "back_color_erase"),
        HueLightnessSaturation = ("hls", "hue_lightness_saturation"),
        ColAddrGlitch = ("xhpa", "col_addr_glitch"),
        CrCancelsMicroMode = ("crxm", "cr_cancels_micro_mode"),
        HasPrintWheel = ("daisy", "has_print_wheel"),
        RowAddrGlitch = ("xvpa", "row_addr_glitch"),
        SemiAutoRightMargin = ("sam", "semi_auto_right_margin"),
        CpiChangesRes = ("cpix", "cpi_changes_res"),
        LpiChangesRes = ("lpix", "lpi_changes_res"),
        BackspacesWithBs = ("OTbs", "backspaces_with_bs"),
        CrtNoScrolling = ("OTns", "crt_no_scrolling"),
        NoCorrectlyWorkingCr = ("OTnc", "no_correctly_working_cr"),
        GnuHasMetaKey = ("OTMT", "gnu_has_meta_key"),
        LinefeedIsNewline = ("OTNL", "linefeed_is_newline"),
        HasHardwareTabs = ("OTpt", "has_hardware_tabs"),
        ReturnDoesClrEol = ("OTxr", "return_does_clr_eol"),
    }
}

capabilities! {
    /// Standard numeric capabilities, in file order
    pub enum NumericCapability {
        Columns = ("cols", "columns"),
        InitTabs = ("it", "init_tabs"),
        Lines = ("lines", "lines"),
        LinesOfMemory = ("lm", "lines_of_memory"),
        MagicCookieGlitch = ("xmc", "magic_cookie_glitch"),
        PaddingBaudRate = ("pb", "padding_baud_rate"),
        VirtualTerminal = ("vt", "virtual_terminal"),
        WidthStatusLine = ("wsl", "width_status_line"),
        NumLabels = ("nlab", "num_labels"),
        LabelHeight = ("lh", "label_height"),
        LabelWidth = ("lw", "label_width"),
        MaxAttributes = ("ma", "max_attributes"),
        MaximumWindows = ("wnum", "maximum_windows"),
        MaxColors = ("colors", "max_colors"),
        MaxPairs = ("pairs", "max_pairs"),
        NoColorVideo = ("ncv", "no_color_video"),
        BufferCapacity = ("bufsz", "buffer_capacity"),
        DotVertSpacing = ("spinv", "dot_vert_spacing"),
        DotHorzSpacing = ("spinh", "dot_horz_spacing"),
        MaxMicroAddress = ("maddr", "max_micro_address"),
        MaxMicroJump = ("mjump", "max_micro_jump"),
        MicroColSize = ("mcs", "micro_col_size"),
        MicroLineSize = ("mls", "micro_line_size"),
        NumberOfPins = ("npins", "number_of_pins"),
        OutputResChar = ("orc", "output_res_char"),
        OutputResLine = ("orl", "output_res_line"),
        OutputResHorzInch = ("orhi", "output_res_horz_inch"),
        OutputResVertInch = ("orvi", "output_res_vert_inch"),
        PrintRate = ("cps", "print_rate"),
        WideCharSize = ("widcs", "wide_char_size"),
        Buttons = ("btns", "buttons"),
        BitImageEntwining = ("bitwin", "bit_image_entwining"),
        BitImageType = ("bitype", "bit_image_type"),
        MagicCookieGlitchUl = ("UTug", "magic_cookie_glitch_ul"),
        CarriageReturnDelay = ("OTdC", "carriage_return_delay"),
        NewLineDelay = ("OTdN", "new_line_delay"),
        BackspaceDelay = ("OTdB", "backspace_delay"),
        HorizontalTabDelay = ("OTdT", "horizontal_tab_delay"),
        NumberOfFunctionKeys = ("OTkn", "number_of_function_keys"),
    }
}

capabilities! {
    /// Standard string capabilities, in file order
    pub enum StringCapability {
        BackTab = ("cbt", "back_tab"),
        Bell = ("bel", "bell"),
        CarriageReturn = ("cr", "carriage_return"),
        ChangeScrollRegion = ("csr", "change_scroll_region"),
        ClearAllTabs = ("tbc", "clear_all_tabs"),
        ClearScreen = ("clear", "clear_screen"),
        ClrEol = ("el", "clr_eol"),
        ClrEos = ("ed", "clr_eos"),
        ColumnAddress = ("hpa", "column_address"),
        CommandCharacter = ("cmdch", "command_character"),
        CursorAddress = ("cup", "cursor_address"),
        CursorDown = ("cud1", "cursor_down"),
        CursorHome = ("home", "cursor_home"),
        CursorInvisible = ("civis", "cursor_invisible"),
        CursorLeft = ("cub1", "cursor_left"),
        CursorMemAddress = ("mrcup", "cursor_mem_address"),
        CursorNormal = ("cnorm", "cursor_normal"),
        CursorRight = ("cuf1", "cursor_right"),
        CursorToLl = ("ll", "cursor_to_ll"),
        CursorUp = ("cuu1", "cursor_up"),
        CursorVisible = ("cvvis", "cursor_visible"),
        DeleteCharacter = ("dch1", "delete_character"),
        DeleteLine = ("dl1", "delete_line"),
        DisStatusLine = ("dsl", "dis_status_line"),
        DownHalfLine = ("hd", "down_half_line"),
        EnterAltCharsetMode = ("smacs", "enter_alt_charset_mode"),
        EnterBlinkMode = ("blink", "enter_blink_mode"),
        EnterBoldMode = ("bold", "enter_bold_mode"),
        EnterCaMode = ("smcup", "enter_ca_mode"),
        EnterDeleteMode = ("smdc", "enter_delete_mode"),
        EnterDimMode = ("dim", "enter_dim_mode"),
        EnterInsertMode = ("smir", "enter_insert_mode"),
        EnterSecureMode = ("invis", "enter_secure_mode"),
        EnterProtectedMode = ("prot", "enter_protected_mode"),
        EnterReverseMode = ("rev", "enter_reverse_mode"),
        EnterStandoutMode = ("smso", "enter_standout_mode"),
        EnterUnderlineMode = ("smul", "enter_underline_mode"),
        EraseChars = ("ech", "erase_chars"),
        ExitAltCharsetMode = ("rmacs", "exit_alt_charset_mode"),
        ExitAttributeMode = ("sgr0", "exit_attribute_mode"),
        ExitCaMode = ("rmcup", "exit_ca_mode"),
        ExitDeleteMode = ("rmdc", "exit_delete_mode"),
        ExitInsertMode = ("rmir", "exit_insert_mode"),
        ExitStandoutMode = ("rmso", "exit_standout_mode"),
        ExitUnderlineMode = ("rmul", "exit_underline_mode"),
        FlashScreen = ("flash", "flash_screen"),
        FormFeed = ("ff", "form_feed"),
        FromStatusLine = ("fsl", "from_status_line"),
        Init1string = ("is1", "init_1string"),
        Init2string = ("is2", "init_2string"),
        Init3string = ("is3", "init_3string"),
        InitFile = ("if", "init_file"),
        InsertCharacter = ("ich1", "insert_character"),
        InsertLine = ("il1", "insert_line"),
        InsertPadding = ("ip", "insert_padding"),
        KeyBackspace = ("kbs", "key_backspace"),
        KeyCatab = ("ktbc", "key_catab"),
        KeyClear = ("kclr", "key_clear"),
        KeyCtab = ("kctab", "key_ctab"),
        KeyDc = ("kdch1", "key_dc"),
        KeyDl = ("kdl1", "key_dl"),
        KeyDown = ("kcud1", "key_down"),
        KeyEic = ("krmir", "key_eic"),
        KeyEol = ("kel", "key_eol"),
        KeyEos = ("ked", "key_eos"),
        KeyF0 = ("kf0", "key_f0"),
        KeyF1 = ("kf1", "key_f1"),
        KeyF10 = ("kf10", "key_f10"),
        KeyF2 = ("kf2", "key_f2"),
        KeyF3 = ("kf3", "key_f3"),
        KeyF4 = ("kf4", "key_f4"),
        KeyF5 = ("kf5", "key_f5"),
        KeyF6 = ("kf6", "key_f6"),
        KeyF7 = ("kf7", "key_f7"),
        KeyF8 = ("kf8", "key_f8"),
        KeyF9 = ("kf9", "key_f9"),
        KeyHome = ("khome", "key_home"),
        KeyIc = ("kich1", "key_ic"),
        KeyIl = ("kil1", "key_il"),
        KeyLeft = ("kcub1", "key_left"),
        KeyLl = ("kll", "key_ll"),
        KeyNpage = ("knp", "key_npage"),
        KeyPpage = ("kpp", "key_ppage"),
        KeyRight = ("kcuf1", "key_right"),
        KeySf = ("kind", "key_sf"),
        KeySr = ("kri", "key_sr"),
        KeyStab = ("khts", "key_stab"),
        KeyUp = ("kcuu1", "key_up"),
        KeypadLocal = ("rmkx", "keypad_local"),
        KeypadXmit = ("smkx", "keypad_xmit"),
        LabF0 = ("lf0", "lab_f0"),
        LabF1 = ("lf1", "lab_f1"),
        LabF10 = ("lf10", "lab_f10"),
        LabF2 = ("lf2", "lab_f2"),
        LabF3 = ("lf3", "lab_f3"),
        LabF4 = ("lf4", "lab_f4"),
        LabF5 = ("lf5", "lab_f5"),
        LabF6 = ("lf6", "lab_f6"),
        LabF7 = ("lf7", "lab_f7"),
        LabF8 = ("lf8", "lab_f8"),
        LabF9 = ("lf9", "lab_f9"),
        MetaOff = ("rmm", "meta_off"),
        MetaOn = ("smm", "meta_on"),
        Newline = ("nel", "newline"),
        PadChar = ("pad", "pad_char"),
        ParmDch = ("dch", "parm_dch"),
        ParmDeleteLine = ("dl", "parm_delete_line"),
        ParmDownCursor = ("cud", "parm_down_cursor"),
        ParmIch = ("ich", "parm_ich"),
        ParmIndex = ("indn", "parm_index"),
        ParmInsertLine = ("il", "parm_insert_line"),
        ParmLeftCursor = ("cub", "parm_left_cursor"),
        ParmRightCursor = ("cuf", "parm_right_cursor"),
        ParmRindex = ("rin", "parm_rindex"),
        ParmUpCursor = ("cuu", "parm_up_cursor"),
        PkeyKey = ("pfkey", "pkey_key"),
        PkeyLocal = ("pfloc", "pkey_local"),
        PkeyXmit = ("pfx", "pkey_xmit"),
        PrintScreen = ("mc0", "print_screen"),
        PrtrOff = ("mc4", "prtr_off"),
        PrtrOn = ("mc5", "prtr_on"),
        RepeatChar = ("rep", "repeat_char"),
        Reset1string = ("rs1", "reset_1string"),
        Reset2string = ("rs2", "reset_2string"),
        Reset3string = ("rs3", "reset_3string"),
        ResetFile = ("rf", "reset_file"),
        RestoreCursor = ("rc", "restore_cursor"),
        RowAddress = ("vpa", "row_address"),
        SaveCursor = ("sc", "save_cursor"),
        ScrollForward = ("ind", "scroll_forward"),
        ScrollReverse = ("ri", "scroll_reverse"),
        SetAttributes = ("sgr", "set_attributes"),
        SetTab = ("hts", "set_tab"),
        SetWindow = ("wind", "set_window"),
        Tab = ("ht", "tab"),
        ToStatusLine = ("tsl", "to_status_line"),
        UnderlineChar = ("uc", "underline_char"),
        UpHalfLine = ("hu", "up_half_line"),
        InitProg = ("iprog", "init_prog"),
        KeyA1 = ("ka1", "key_a1"),
        KeyA3 = ("ka3", "key_a3"),
        KeyB2 = ("kb2", "key_b2"),
        KeyC1 = ("kc1", "key_c1"),
        KeyC3 = ("kc3", "key_c3"),
        PrtrNon = ("mc5p", "prtr_non"),
        CharPadding = ("rmp", "char_padding"),
        AcsChars = ("acsc", "acs_chars"),
        PlabNorm = ("pln", "plab_norm"),
        KeyBtab = ("kcbt", "key_btab"),
        EnterXonMode = ("smxon", "enter_xon_mode"),
        ExitXonMode = ("rmxon", "exit_xon_mode"),
        EnterAmMode = ("smam", "enter_am_mode"),
        ExitAmMode = ("rmam", "exit_am_mode"),
        XonCharacter = ("xonc", "xon_character"),
        XoffCharacter = ("xoffc", "xoff_character"),
        EnaAcs = ("enacs", "ena_acs"),
        LabelOn = ("smln", "label_on"),
        LabelOff = ("rmln", "label_off"),
        KeyBeg = ("kbeg", "key_beg"),
        KeyCancel = ("kcan", "key_cancel"),
        KeyClose = ("kclo", "key_close"),
        KeyCommand = ("kcmd", "key_command"),
        KeyCopy = ("kcpy", "key_copy"),
        KeyCreate = ("kcrt", "key_create"),
        KeyEnd = ("kend", "key_end"),
        KeyEnter = ("kent", "key_enter"),
        KeyExit = ("kext", "key_exit"),
        KeyFind = ("kfnd", "key_find"),
        KeyHelp = ("khlp", "key_help"),
        KeyMark = ("kmrk", "key_mark"),
        KeyMessage = ("kmsg", "key_message"),
        KeyMove = ("kmov", "key_move"),
        KeyNext = ("knxt", "key_next"),
        KeyOpen = ("kopn", "key_open"),
        KeyOptions = ("kopt", "key_options"),
        KeyPrevious = ("kprv", "key_previous"),
        KeyPrint = ("kprt", "key_print"),
        KeyRedo = ("krdo", "key_redo"),
        KeyReference = ("kref", "key_reference"),
        KeyRefresh = ("krfr", "key_refresh"),
        KeyReplace = ("krpl", "key_replace"),
        KeyRestart = ("krst", "key_restart"),
        KeyResume = ("kres", "key_resume"),
        KeySave = ("ksav", "key_save"),
        KeySuspend = ("kspd", "key_suspend"),
        KeyUndo = ("kund", "key_undo"),
        KeySbeg = ("kBEG", "key_sbeg"),
        KeyScancel = ("kCAN", "key_scancel"),
        KeyScommand = ("kCMD", "key_scommand"),
        KeyScopy = ("kCPY", "key_scopy"),
        KeyScreate = ("kCRT", "key_screate"),
        KeySdc = ("kDC", "key_sdc"),
        KeySdl = ("kDL", "key_sdl"),
        KeySelect = ("kslt", "key_select"),
        KeySend = ("kEND", "key_send"),
        KeySeol = ("kEOL", "key_seol"),
        KeySexit = ("kEXT", "key_sexit"),
        KeySfind = ("kFND", "key_sfind"),
        KeyShelp = ("kHLP", "key_shelp"),
        KeyShome = ("kHOM", "key_shome"),
        KeySic = ("kIC", "key_sic"),
        KeySleft = ("kLFT", "key_sleft"),
        KeySmessage = ("kMSG", "key_smessage"),
        KeySmove = ("kMOV", "key_smove"),
        KeySnext = ("kNXT", "key_snext"),
        KeySoptions = ("kOPT", "key_soptions"),
        KeySprevious = ("kPRV", "key_sprevious"),
        KeySprint = ("kPRT", "key_sprint"),
        KeySredo = ("kRDO", "key_sredo"),
        KeySreplace = ("kRPL", "key_sreplace"),
        KeySright = ("kRIT", "key_sright"),
        KeySrsume = ("kRES", "key_srsume"),
        KeySsave = ("kSAV", "key_ssave"),
        KeySsuspend = ("kSPD", "key_ssuspend"),
        KeySundo = ("kUND", "key_sundo"),
        ReqForInput = ("rfi", "req_for_input"),
        KeyF11 = ("kf11", "key_f11"),
        KeyF12 = ("kf12", "key_f12"),
        KeyF13 = ("kf13", "key_f13"),
        KeyF14 = ("kf14", "key_f14"),
        KeyF15 = ("kf15", "key_f15"),
        KeyF16 = ("kf16", "key_f16"),
        KeyF17 = ("kf17", "key_f17"),
        KeyF18 = ("kf18", "key_f18"),
        KeyF19 = ("kf19", "key_f19"),
        KeyF20 = ("kf20", "key_f20"),
        KeyF21 = ("kf21", "key_f21"),
        KeyF22 = ("kf22", "key_f22"),
        KeyF23 = ("kf23", "key_f23"),
        KeyF24 = ("kf24", "key_f24"),
        KeyF25 = ("kf25", "key_f25"),
        KeyF26 = ("kf26", "key_f26"),
        KeyF27 = ("kf27", "key_f27"),
        KeyF28 = ("kf28", "key_f28"),
        KeyF29 = ("kf29", "key_f29"),
        KeyF30 = ("kf30", "key_f30"),
        KeyF31 = ("kf31", "key_f31"),
        KeyF32 = ("kf32", "key_f32"),
        KeyF33 = ("kf33", "key_f33"),
        KeyF34 = ("kf34", "key_f34"),
        KeyF35 = ("kf35", "key_f35"),
        KeyF36 = ("kf36", "key_f36"),
        KeyF37 = ("kf37", "key_f37"),
        KeyF38 = ("kf38", "key_f38"),
        KeyF39 = ("kf39", "key_f39"),
        KeyF40 = ("kf40", "key_f40"),
        KeyF41 = ("kf41", "key_f41"),
        KeyF42 = ("kf42", "key_f42"),
        KeyF43 = ("kf43", "key_f43"),
        KeyF44 = ("kf44", "key_f44"),
        KeyF45 = ("kf45", "key_f45"),
        KeyF46 = ("kf46", "key_f46"),
        KeyF47 = ("kf47", "key_f47"),
        KeyF48 = ("kf48", "key_f48"),
        KeyF49 = ("kf49", "key_f49"),
        KeyF50 = ("kf50", "key_f50"),
        KeyF51 = ("kf51", "key_f51"),
        KeyF52 = ("kf52", "key_f52"),
        KeyF53 = ("kf53", "key_f53"),
        KeyF54 = ("kf54", "key_f54"),
        KeyF55 = ("kf55", "key_f55"),
        KeyF56 = ("kf56", "key_f56"),
        KeyF57 = ("kf57", "key_f57"),
        KeyF58 = ("kf58", "key_f58"),
        KeyF59 = ("kf59", "key_f59"),
        KeyF60 = ("kf60", "key_f60"),
        KeyF61 = ("kf61", "key_f61"),
        KeyF62 = ("kf62", "key_f62"),
        KeyF63 = ("kf63", "key_f63"),
        ClrBol = ("el1", "clr_bol"),
        ClearMargins = ("mgc", "clear_margins"),
        SetLeftMargin = ("smgl", "set_left_margin"),
        SetRightMargin = ("smgr", "set_right_margin"),
        LabelFormat = ("fln", "label_format"),
        SetClock = ("sclk", "set_clock"),
        DisplayClock = ("dclk", "display_clock"),
        RemoveClock = ("rmclk", "remove_clock"),
        CreateWindow = ("cwin", "create_window"),
        GotoWindow = ("wingo", "goto_window"),
        Hangup = ("hup", "hangup"),
        DialPhone = ("dial", "dial_phone"),
        QuickDial = ("qdial", "quick_dial"),
        Tone = ("tone", "tone"),
        Pulse = ("pulse", "pulse"),
        FlashHook = ("hook", "flash_hook"),
        FixedPause = ("pause", "fixed_pause"),
        WaitTone = ("wait", "wait_tone"),
        User0 = ("u0", "user0"),
        User1 = ("u1", "user1"),
        User2 = ("u2", "user2"),
        User3 = ("u3", "user3"),
        User4 = ("u4", "user4"),
        User5 = ("u5", "user5"),
        User6 = ("u6", "user6"),
        User7 = ("u7", "user7"),
        User8 = ("u8", "user8"),
        User9 = ("u9", "user9"),
        OrigPair = ("op", "orig_pair"),
        OrigColors = ("oc", "orig_colors"),
        InitializeColor = ("initc", "initialize_color"),
        InitializePair = ("initp", "initialize_pair"),
        SetColorPair = ("scp", "set_color_pair"),
        SetForeground = ("setf", "set_foreground"),
        SetBackground = ("setb", "set_background"),
        ChangeCharPitch = ("cpi", "change_char_pitch"),
        ChangeLinePitch = ("lpi", "change_line_pitch"),
        ChangeResHorz = ("chr", "change_res_horz"),
        ChangeResVert = ("cvr", "change_res_vert"),
        DefineChar = ("defc", "define_char"),
        EnterDoublewideMode = ("swidm", "enter_doublewide_mode"),
        EnterDraftQuality = ("sdrfq", "enter_draft_quality"),
        EnterItalicsMode = ("sitm", "enter_italics_mode"),
        EnterLeftwardMode = ("slm", "enter_leftward_mode"),
        EnterMicroMode = ("smicm", "enter_micro_mode"),
        EnterNearLetterQuality = ("snlq", "enter_near_letter_quality"),
        EnterNormalQuality = ("snrmq", "enter_normal_quality"),
        EnterShadowMode = ("sshm", "enter_shadow_mode"),
        EnterSubscriptMode = ("ssubm", "enter_subscript_mode"),
        EnterSuperscriptMode = ("ssupm", "enter_superscript_mode"),
        EnterUpwardMode = ("sum", "enter_upward_mode"),
        ExitDoublewideMode = ("rwidm", "exit_doublewide_mode"),
        ExitItalicsMode = ("ritm", "exit_italics_mode"),
        ExitLeftwardMode = ("rlm", "exit_leftward_mode"),
        ExitMicroMode = ("rmicm", "exit_micro_mode"),
        ExitShadowMode = ("rshm", "exit_shadow_mode"),
        ExitSubscriptMode = ("rsubm", "exit_subscript_mode"),
        ExitSuperscriptMode = ("rsupm", "exit_superscript_mode"),
        ExitUpwardMode = ("rum", "exit_upward_mode"),
        MicroColumnAddress = ("mhpa", "micro_column_address"),
        MicroDown = ("mcud1", "micro_down"),
        MicroLeft = ("mcub1", "micro_left"),
        MicroRight = ("mcuf1", "micro_right"),
        MicroRowAddress = ("mvpa", "micro_row_address"),
        MicroUp = ("mcuu1", "micro_up"),
        OrderOfPins = ("porder", "order_of_pins"),
        ParmDownMicro = ("mcud", "parm_down_micro"),
        ParmLeftMicro = ("mcub", "parm_left_micro"),
        ParmRightMicro = ("mcuf", "parm_right_micro"),
        ParmUpMicro = ("mcuu", "parm_up_micro"),
        SelectCharSet = ("scs", "select_char_set"),
        SetBottomMargin = ("smgb", "set_bottom_margin"),
        SetBottomMarginParm = ("smgbp", "set_bottom_margin_parm"),
        SetLeftMarginParm = ("smglp", "set_left_margin_parm"),
        SetRightMarginParm = ("smgrp", "set_right_margin_parm"),
        SetTopMargin = ("smgt", "set_top_margin"),
        SetTopMarginParm = ("smgtp", "set_top_margin_parm"),
        StartBitImage = ("sbim", "start_bit_image"),
        StartCharSetDef = ("scsd", "start_char_set_def"),
        StopBitImage = ("rbim", "stop_bit_image"),
        StopCharSetDef = ("rcsd", "stop_char_set_def"),
        SubscriptCharacters = ("subcs", "subscript_characters"),
        SuperscriptCharacters = ("supcs", "superscript_characters"),
        TheseCauseCr = ("docr", "these_cause_cr"),
        ZeroMotion = ("zerom", "zero_motion"),
        CharSetNames = ("csnm", "char_set_names"),
        KeyMouse = ("kmous", "key_mouse"),
        MouseInfo = ("minfo", "mouse_info"),
        ReqMousePos = ("reqmp", "req_mouse_pos"),
        GetMouse = ("getm", "get_mouse"),
        SetAForeground = ("setaf", "set_a_foreground"),
        SetABackground = ("setab", "set_a_background"),
        PkeyPlab = ("pfxl", "pkey_plab"),
        DeviceType = ("devt", "device_type"),
        CodeSetInit = ("csin", "code_set_init"),
        Set0DesSeq = ("s0ds", "set0_des_seq"),
        Set1DesSeq = ("s1ds", "set1_des_seq"),
        Set2DesSeq = ("s2ds", "set2_des_seq"),
        Set3DesSeq = ("s3ds", "set3_des_seq"),
        SetLrMargin = ("smglr", "set_lr_margin"),
        SetTbMargin = ("smgtb", "set_tb_margin"),
        BitImageRepeat = ("birep", "bit_image_repeat"),
        BitImageNewline = ("binel", "bit_image_newline"),
        BitImageCarriageReturn = ("bicr", "bit_image_carriage_return"),
        ColorNames = ("colornm", "color_names"),
        DefineBitImageRegion = ("defbi", "define_bit_image_region"),
        EndBitImageRegion = ("endbi", "end_bit_image_region"),
        SetColorBand = ("setcolor", "set_color_band"),
        SetPageLength = ("slines", "set_page_length"),
        DisplayPcChar = ("dispc", "display_pc_char"),
        EnterPcCharsetMode = ("smpch", "enter_pc_charset_mode"),
        ExitPcCharsetMode = ("rmpch", "exit_pc_charset_mode"),
        EnterScancodeMode = ("smsc", "enter_scancode_mode"),
        ExitScancodeMode = ("rmsc", "exit_scancode_mode"),
        PcTermOptions = ("pctrm", "pc_term_options"),
        ScancodeEscape = ("scesc", "scancode_escape"),
        AltScancodeEsc = ("scesa", "alt_scancode_esc"),
        EnterHorizontalHlMode = ("ehhlm", "enter_horizontal_hl_mode"),
        EnterLeftHlMode = ("elhlm", "enter_left_hl_mode"),
        EnterLowHlMode = ("elohlm", "enter_low_hl_mode"),
        EnterRightHlMode = ("erhlm", "enter_right_hl_mode"),
        EnterTopHlMode = ("ethlm", "enter_top_hl_mode"),
        EnterVerticalHlMode = ("evhlm", "enter_vertical_hl_mode"),
        SetAAttributes = ("sgr1", "set_a_attributes"),
        SetPglenInch = ("slength", "set_pglen_inch"),
        TermcapInit2 = ("OTi2", "termcap_init2"),
        TermcapReset = ("OTrs", "termcap_reset"),
        LinefeedIfNotLf = ("OTnl", "linefeed_if_not_lf"),
        BackspaceIfNotBs = ("OTbs", "backspace_if_not_bs"),
        OtherNonFunctionKeys = ("OTko", "other_non_function_keys"),
        ArrowKeyMap = ("OTma", "arrow_key_map"),
        AcsUlcorner = ("OTG2", "acs_ulcorner"),
        AcsLlcorner = ("OTG3", "acs_llcorner"),
        AcsUrcorner = ("OTG1", "acs_urcorner"),
        AcsLrcorner = ("OTG4", "acs_lrcorner"),
        AcsLtee = ("OTGR", "acs_ltee"),
        AcsRtee = ("OTGL", "acs_rtee"),
        AcsBtee = ("OTGU", "acs_btee"),
        AcsTtee = ("OTGD", "acs_ttee"),
        AcsHline = ("OTGH", "acs_hline"),
        AcsVline = ("OTGV", "acs_vline"),
        AcsPlus = ("OTGC", "acs_plus"),
        MemoryLock = ("meml", "memory_lock"),
        MemoryUnlock = ("memu", "memory_unlock"),
        BoxChars1 = ("box1", "box_chars_1"),
    }
}
