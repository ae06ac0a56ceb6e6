//! Zobrist hashing keys.
//!
//! A fixed table of 1000 pseudo-random 64-bit values, emitted once by a
//! generator run and committed verbatim so hashes are reproducible across
//! builds. Placements are keyed by `((player*6 + piece) << 6) + square`
//! with pieces numbered 1 to 6; flag bits are keyed by their bare bit
//! number (the piece-0 region of the table).

use super::types::{Piece, Player, Square};

#[rustfmt::skip]
pub(crate) const KEYS: [u64; 1000] = [
    0x1a7bb1d32bc5b417, 0x16b6600e44c215db, 0xce3bef38081572a6, 0xafa0624cbc4719b2,
    0xde47f81053976d2a, 0xa69567db98c56c1e, 0xd1d40cf0ab2e97eb, 0x7fad8c6aa7e097fb,
    0xf895767f803b1e25, 0x0fa56abe22a286e1, 0x2567a3c4e1c54a19, 0x7fce143e8d6708da,
    0x8392441809ea8872, 0xb622957ca3f53bf7, 0x6e7218f905eace23, 0x03cc832e41baceb7,
    0x2b5f9f6befc0e17b, 0xf3fb0fecd3274453, 0x52a35ff80d547424, 0x5b77907d9e35c745,
    0x4ed8c62b1373cb62, 0x71d90bb834b5dec5, 0x76fef4f1c185e0b5, 0x11ec1f8ae49c94ae,
    0x729942243df3d10f, 0xa5330539fa95b164, 0x8ed02884619ee161, 0xf4b3e18eaeb6d319,
    0xdc716db20af38e70, 0x6ff273fd2f1abc10, 0x1526cb8b9a520ecb, 0xf7f49438a437b41c,
    0x081279b31ebec6c6, 0x0f6c19493afc00c4, 0x93d73859c2055e4f, 0xa8140c308539168c,
    0xceddd83114f0ba66, 0x09c88568d4d93ddf, 0x568edaded670fc78, 0x36f605e3ba501058,
    0xab4f7d1efd9d9247, 0x5107544f7386ac23, 0x1854b7bcdee37f9f, 0xc934fd5bf437d271,
    0x5be3493a2807b398, 0x8ad76a11c4e8d21d, 0x273547a4d54efe81, 0x06c2e28a0a16b9a3,
    0x7a3a2f7beecc46bb, 0x68f28a1b54378942, 0x7f008f278df1136f, 0xe434c5e97c68bf24,
    0x2f68e4fc4c2cfe76, 0xd01d8013590f51aa, 0x961cd8e3fa685d46, 0x975883aca6ec38e4,
    0x46e87abea9933e74, 0x36102ac56fb55d7c, 0x3190a1e675d5a4d5, 0xdf358841f67be9b0,
    0x5361e206338676df, 0x901ea1c2d102b527, 0x03456e826827ffc8, 0x8cc52fa1ea936fdc,
    0x553c72ad9025a08e, 0x97bdb948ae5c7bd4, 0x105797aa58cd79c9, 0x4ab5e944b91525bd,
    0xda3a859ffc0c1648, 0xe73e95de191bf7db, 0x4cdd86bd2698a85e, 0x451da573139a0d7c,
    0x041f25045137f696, 0xe7471b10a34ac38c, 0xb783bc949162c19e, 0xf05b933524bb8112,
    0x2b6d87da92ff8e2b, 0x25d8ca816f7c53d4, 0x3cb0e667657b4a91, 0xb3610d0160d7600b,
    0x36e883d15049b282, 0x67c0198656e182c6, 0xc9ac62c9d90e370d, 0x48b6f752b8893a57,
    0x9573500ebda4a3fb, 0xe9641cc385fb13a8, 0xda5400c63c3ad456, 0x01af010f7a19c699,
    0x36bb97af9fcd5a8c, 0xce89e49f26a1724e, 0x4591551f5966905d, 0x682b589773a43466,
    0x789f34ed84b162c6, 0x577f3d42549c185c, 0x952b24bbc0b250e5, 0xe1eaaa68b7d9d444,
    0x25a397a2b5ca0e9c, 0xee680dbe680df6a2, 0x1896bb9b4c5fd679, 0x72d23caf750ed853,
    0x76a56f2b9054c32b, 0xb22898728d63ac48, 0x70a5027a810775ce, 0xc1b42749726085b7,
    0x184330521057dd80, 0xfff6e63b1b15071d, 0x6e6b45287f2ea48c, 0x121b799a4e97ad14,
    0x4298e86d46355574, 0xe88fb253be9a8f91, 0xdcdebcbb72dc59f0, 0xcc99123c0aaf36d3,
    0xf65469a4bb6f5b43, 0x9aa11fe27132c837, 0x16cf8ae915e033d2, 0xe97ea89910c2ffa9,
    0x3b65c4f668d5eda1, 0x17915fa11ed3b790, 0x8dd70930b809f470, 0x10e8f13d922951a9,
    0x02d36a8b9224f5c5, 0xd8940f154194af50, 0xa8f603b9e2fc9c39, 0xfa9f552a13c53a31,
    0x490faa6b8f182eff, 0x0632f0d479735ceb, 0x294f08b1e2716b2a, 0xbb509357d914b630,
    0x87808c5802da3df5, 0x831d627a2a42f99e, 0xa6d1529f2b4cfaf1, 0x3263e04bb1c6cbc6,
    0x218989c529369939, 0x014f126d0aa94a0d, 0x220923dad3270969, 0x8f7b1c19e3338c5a,
    0x3743f80883996a2b, 0x56bc6f6ac81d5da8, 0xb0e9a9cf213bb07f, 0x2b6382499c8772d1,
    0xd679e9a7edb82f71, 0x47f739ab0cc79d46, 0x304f48f4c813444d, 0xadfffee0225c6859,
    0xd6063502d1943b10, 0x3b9f2927971fbf84, 0x1646ad6470e16384, 0x729c24c6e6915dda,
    0x165227d2a2dff4dc, 0xa8577b556d11a07d, 0x3bf5ecb84c7e730e, 0xad5108c7b4a444f5,
    0x20ce8b156a984fc2, 0xdeb82a3f0af62bd6, 0xf115c7a96dbee4d2, 0x711ab9454464a24a,
    0xcee14ebe27b0c45c, 0xd98c01b78a3098f3, 0xfa02d7b1c1c43bf2, 0x218003d4aeef8178,
    0xd8a6213d2a1027f0, 0xdb28dc8219d36f0b, 0xed3bb2d767d0de96, 0xa75408e3c41d1020,
    0x53bb76cd5024ad0e, 0x75019b31ff948950, 0x7df2c44e2706bb2c, 0xa91e1d38d7d07190,
    0xa20865fc6faa53d8, 0x462ce9ab73d3ff53, 0x44c29d570fd04138, 0xcb6d5ad60843c920,
    0x55ed1bb3e287c627, 0xbae5f71634fca98a, 0x31ea2c74b6513b4d, 0x30c2391b17b0659a,
    0xfdca12aba90c5917, 0xb178e73452a92452, 0xc9ee4097e99b57b5, 0x28959278c587eb49,
    0x96c62ef73ea0202f, 0xcfef1e239c96f483, 0xfad814679b773f0b, 0xf520928ffe816a58,
    0x7978fa47a146db4e, 0x834001faa1e67060, 0xed10de447b558658, 0x5e65b20bf90cea6e,
    0xcc6cba84c3ccf782, 0x62a93d8e16e86807, 0x23024c4e46b3bcde, 0xf1c00dad3ae00c4c,
    0x930805633d5c3516, 0x0b168b68b12cd30f, 0x638604da793c42e3, 0x2f2caefcf7200448,
    0xe36c7bb774d8c0ac, 0x5a4470f4cb95e8ae, 0x5d9a51e570299a2e, 0x44c4157eb2159a22,
    0xfe49339389c574b3, 0x9b890c94372174e7, 0xe8f3464583ed3637, 0xb7ee59f194c4fe57,
    0x6b48f36647affe2b, 0x24662619b0a40681, 0x60dfd04fa5f8e440, 0x501e25643653d35f,
    0x03de3f43cb0d642a, 0x8add716ef7c65a29, 0x917ed089bd1afa82, 0xa5a94d90f260a139,
    0x67cebaa1a68e4c9c, 0x57c6397e32997bba, 0x47ba167892a6e802, 0x9165629d5c941d62,
    0x90c347dfbd6108fa, 0xe07cbf42d790a008, 0x2177f1f59ed07d4e, 0x4f039cc8298055a0,
    0xb776528f8ff91843, 0x245a33ae2cb854e3, 0x09bfeaee5ee5b807, 0xcd503b249ee05f0c,
    0x02d220d3ea6c34f2, 0x5824288968359aa0, 0x464862f8c5cd6993, 0xa4d26118285eb437,
    0x773463437ec66d15, 0x6f135165b4b4e73e, 0x18ed536ca2a04b8f, 0x282dc0f2f74a24a6,
    0x2f40f5683e525454, 0x02b68982b938ae3f, 0xd2ab04d5821093f8, 0x46687a8b8420bd2a,
    0x184768fd0aee8505, 0x17d343986ad1e170, 0x555ff63ceb352e10, 0x88a8f446d7a35cb1,
    0x4f4c86a89c0a61e9, 0x82ca8e838dd22f11, 0x584b005117bc459d, 0x9c027717f5ca733d,
    0x6ca9b184a3f4ac43, 0x150a4f156eb6b18d, 0x8d64f6580454e710, 0x276b7079ce09a0e1,
    0x31c3d7fc494b6d72, 0x7f1f91d2bdc2a79e, 0x2d53da1f44c5078d, 0x4ace2d18e09dce80,
    0xdbf7ec0f27aee79f, 0x3d0da17e5d285d12, 0x84f01238efecba04, 0x7563d0b21d9196ae,
    0x7da7a3fb80110b25, 0xb89671dee30921d3, 0x2040efe567e52be1, 0x9e44d9b70d440bf7,
    0xccbe18c98497d4e4, 0x25732d2966befc6f, 0x58c592bf575c8ec0, 0x058c313620b09b32,
    0xf062f6df0966cd4e, 0xf7c356f1c2c9052f, 0x74b71c2de09027e7, 0x203902a245aff634,
    0xca47d716927a838f, 0x063e5faeffebecdc, 0x87acf3dfd42de808, 0x3ded298bd4ec950a,
    0x5c58f66d36ac3208, 0x9bdcdf334dc47097, 0xc0d4892addce312c, 0xc576a469b8921426,
    0x79bea983fff3e4ac, 0x51f5166a75ff29df, 0x079159fa0198cc42, 0x9dfeb38b8ef5194a,
    0x535ba67599622fec, 0xea2b7385493e076a, 0x4938fc08e6d53afb, 0xd3db3ed99bb548fb,
    0x6801768e6f3fbd2b, 0x5bcc4839439176a8, 0x6525f8c35390f6c2, 0xf0d6e20c13799f2d,
    0xfcbcd74404e0a79e, 0xa88d0d1ca5d1eb92, 0x2cb6ee61c7123d9e, 0x5fc657a195b2b40f,
    0x6fccaf755587cb63, 0x2f93334f6ee33b94, 0xf3e89fa84a9f5a89, 0x67d58ec0d97d02f4,
    0x10e746f1cb85c51c, 0xa3eaff8fa6e5172f, 0x53897d028c40fb92, 0xf00da62c88c43541,
    0x2bfaa20e1a94597d, 0x082aee6f02e40859, 0x0e6dbb6af3cd730d, 0x7e66f8b1e6d6ce20,
    0x7891a22f56f8f4b2, 0x28ba6551858740be, 0xb139e0a710f7e32c, 0x297dc0329c6817dd,
    0x03e02870f6b99802, 0x920da9bab5aa2e08, 0x5a3ed79c0157e3fd, 0x5f07a25f6145b1f2,
    0x650b6019211ee422, 0x80b7c67ea0675647, 0x9a7d1968d89bf9fc, 0xf3421272af724c78,
    0xa172aaa43742d629, 0x060d2d9a87643a25, 0x06b9818e8989d6d4, 0xaf375126aab08c2c,
    0xafb08243f95493c9, 0x056823ce218bf86a, 0x599fa4be5eeaf800, 0x2f459b115a9111db,
    0xef4dba3e2f852500, 0x324aaf082d2f0ecb, 0xa645f0e8ae66f039, 0x7714bcebc0b2dd44,
    0xc37c731c7288bcea, 0x58cf766928cb44b6, 0xa21da846389b4928, 0x193103a00a576e98,
    0xe545222c0b990189, 0x98a915b41e9e72c8, 0x5f638bd82ff25189, 0xf16d955544827a20,
    0x2137321071917b24, 0x5ccff1105a56b59f, 0xf5e9ec8df4b454d2, 0x36b0776367bfe1be,
    0xf39979e4068c2357, 0x1baf80e964369028, 0x8619415d35652436, 0x2fc8a56834e2423b,
    0x4bf5e53d8d8cd366, 0xde3beaa9177233a5, 0xf14382099987aac6, 0x7806a650e13e5a73,
    0xe26e388d35117c31, 0xe04277150d7fba0a, 0x4b55123e08af7639, 0xc34e6fd7d367631a,
    0x032fd43a82d6ec31, 0x8a2f3cfaf0fa4bd5, 0xb8e95da891f974d8, 0x04a60c9e2eb852dd,
    0x7fdf49eb70cf0058, 0xcf02735ef5553559, 0x79c1750a24393cd4, 0x1e209f0981088241,
    0x2be9667e40dc808c, 0x13e7c71043eb088a, 0xe60439b9560a9fbd, 0x51f4093f0d06ca26,
    0xe4a2343bd79cdabf, 0x6bb7b0772de5ebd8, 0x740b2a35dc5d1f1e, 0xffa9301ddb52021d,
    0x6d772d9f8c9f64a1, 0x6c7e51a7f0e4477a, 0x255a2699d83dbcdc, 0x5b66c117681ffb3a,
    0xf5a3d9f4d8bd1f35, 0x9514722429c2e7f4, 0xec63286475cd6035, 0x0a075a155bb8459a,
    0xbad6a54a6dac01dd, 0x2cf9da1d628e3a2c, 0xa375e4bc601b8397, 0xf9c445d7c91429b9,
    0x66b7437ccd81dae1, 0x8cb57d899f105f20, 0x82d893dd08714dde, 0x7a6226366d95925e,
    0x61be987130ecb987, 0xcadc0e77f1714ec5, 0xa7a9565bad345f8c, 0xe6b11af064948af9,
    0xf6f1d6321dcfcde5, 0x0a28f4b4d7584990, 0x0e4386af1384b768, 0xa5a8120615fe168d,
    0xe477409cfa08cc20, 0x9f247f5a08c45e37, 0xe3f04fea8e7a44a5, 0x6a517b13c002a339,
    0xdbb5f410ddcae254, 0x710b5643691d27a5, 0x2cfaa4bd5477567a, 0x47aee5fb369a8ade,
    0x254256d03bc2023a, 0x476520349828aba4, 0x7bff1cd7fda79cb6, 0x50b5144bdd2db47a,
    0x54a2fe3683036069, 0xf466c33fbdd6fe2b, 0x72de798b9bfd4ec1, 0x718b3c3b371dadac,
    0xdbfe290dffe3634f, 0xbfccb670707f4c71, 0xadd6336be77b4849, 0x168036748557c2ed,
    0xf9dbaa8e192c2323, 0xb8e69ae6429239be, 0xf538c5b09ff634e4, 0x8f79c5aa49f9bc89,
    0xabf7fccdee13dd9d, 0xc994ff0a05c92e70, 0xc2d5573b60ddf2ac, 0x3fd956dbe5bf78d7,
    0xf747a584aab05fa9, 0x2496ffea6d0bdc5e, 0x74719842b483f427, 0xe64c04f7dd0d6e77,
    0xfca7153e6218dfcd, 0xa696f6154e8abf50, 0x549052f69382ce96, 0xd5fc646fb9d1b0c4,
    0x862d42747a3338e5, 0x8cafdc22e7818b20, 0x0eaf1f4f4d9de0b4, 0xfea2f2b822183fdc,
    0xa04dbc493588c0d4, 0x077bdf8113e4fbc3, 0xd4c4bf1069ef135f, 0x3b788bb86d0b1819,
    0x8c4a5dbf482da18f, 0x2cd0e18e5de0ab14, 0x760fb030361a359a, 0xe44e599b40a0adb3,
    0x84f5211bdd93d4c1, 0x56c1102070af111b, 0x3362a90e82c9636d, 0x03a5535dd628b779,
    0xf0ef28ec42901976, 0x9ab8d311b7cc79c9, 0x8d457cbcead8352e, 0x9e921cbebaf7d300,
    0xb7686d84f54e2fbf, 0xa8babd36249f5942, 0x852681f2e9d14ada, 0x7faa8c934af83495,
    0x41bccf8c206ccef9, 0x8f9a5f3fc784ca85, 0x2771811eccd018cc, 0x75b04ef94112ec00,
    0x7397ae07bcfa4f64, 0x314cfbc17b2086fb, 0xf56fa49d80519eee, 0xbd95a07e2567f00e,
    0xf988ed82d4345ebe, 0xdaa25395392a9bf2, 0xb402d5bbfab5fed9, 0x87fa265e621157c1,
    0x5f51f92bd044e9a0, 0xa309039161a3d8ad, 0xa3b4726fdaa666ae, 0xa32f72b522c5f1c8,
    0x6ddf22fb34c281a1, 0x7447447ba1c29e64, 0xa0e8e5973b78401a, 0x2aa9a1836efd33fb,
    0x17b9bbdbb01f09f7, 0xe7db47355b113e28, 0x762329e213653d98, 0x9463926483976b5e,
    0xadc1b40d298e46c3, 0x149eaa495ddf2004, 0x368b037879a53263, 0x46c1c469657200f0,
    0xe6fd602c25cf9032, 0x965e7277f81a90a8, 0x157bd7856a7a86e6, 0xa7bd7dffb85c24a0,
    0xc3fb5b907a095360, 0x34266e7673476e08, 0x724fdcac48083250, 0x965e347bb4a5081d,
    0x19472410f6206c58, 0x82000d567ec97a13, 0x2b6818088c80a8a9, 0x38b716f6b58c052e,
    0x1c09c9e410d59c77, 0xd252f137c11a7c45, 0x31e377299efd7c46, 0x34375e8079f993b0,
    0x427744a37748f8f5, 0x4a4d6a297e15aa77, 0x2149ecd4ab06985f, 0xe3f653c4ceb2b925,
    0xd5d7dd3764d0678a, 0x25ef9c9d7fe4e737, 0x821560b91c0e3a03, 0xa7af624b697a7487,
    0xc3c4d8e8bbeff354, 0x85bdd49bed3fd8fc, 0x886e02dd52624fc4, 0xf8c7860ed95884d7,
    0x3eaa417600c0dad9, 0xa5f73649c07a5beb, 0xe956d524b788cc9e, 0xcffdeb794f306a2a,
    0x5549477dbe5bf31c, 0xb2059a2db3b2850e, 0x7e39a613e92232fd, 0x78f23a036addc496,
    0xda4588f48fc3ed4b, 0xb38047567a0c4965, 0x782530f2ef7328fe, 0xb443f61ac5267a57,
    0xbe52c813a119eae9, 0xf370aec0744e15af, 0x68454cef408c403a, 0x7466e698d4e3f70f,
    0x270614f7114acc2c, 0x2d3295f874883971, 0xe48b24db146422e3, 0x2b36e285ed7d1de2,
    0x61b75025703fd98f, 0xc58213cdc772e146, 0xfe234f6abc59b8bb, 0x0f0639c4f020a3aa,
    0x2547e3063db803c9, 0x92023e935fddaacf, 0xc7cb32fd879598f9, 0x62302bb61f38e939,
    0x3f169fe7e3c1945d, 0xa04bae60546c173f, 0x0007fbe3c64caff8, 0x7148e676b664df3f,
    0xf5e5e200a461700d, 0xafb5809e5b503f9d, 0x61a3fb12a51695d1, 0x97815e9a2938d932,
    0xce27ade2f996a494, 0x17a5cce1580af645, 0x6e097760f65ad97a, 0x0a4d25e833d6562b,
    0xd1f76e8db5d3fc6a, 0xe19a14ccc197da7c, 0x04bf7daf420de75b, 0x75ef1ed233bd9463,
    0x63454f712ddd90b9, 0x0919dd5a800aee9b, 0x7e1ed119b00097c7, 0x576639d9f692e0b6,
    0x55461ffb996d7f5a, 0x499349f410e74766, 0x8427110b557d0b48, 0xe5efc173b6f72c13,
    0x105a51151db8010c, 0xd11980f4e5a2e038, 0x1f80a5160a21dab3, 0x122ecb562237c880,
    0xc6e5f3f70c84a72a, 0xc3403e442e1362a3, 0x08839468475a43fe, 0xe3c2eed831763bb8,
    0xd380206c017c7254, 0xe993127bf89acbc7, 0x056661f0ed35725c, 0xa1823c3ab61dac86,
    0x4f2f3d35a3c3dd45, 0x37729b6d3fb92f8f, 0x8817bbb2d1b3044b, 0xa2763feba5eeb465,
    0x52c7513395e0a960, 0xe1f16fa56b061de8, 0x490681a2848a0f5d, 0x2b276d0627268ecc,
    0x05568d7645d12dbc, 0xeeb6397d36b25082, 0x9080ee6c7b3c4359, 0xa0d3e4a8ed8dcd71,
    0xfb7e5ee8eda0fab8, 0x462d0294a9db59f4, 0x360deda734335f3f, 0x412290a1c85a9e06,
    0xf2d8c55d46fad26b, 0xc2e6c6422bc41946, 0x58c2a1f804c1e28b, 0xae34bb1497f4fde9,
    0x1ce3a80faf7921dc, 0x9073b833c51f21d9, 0x9108ed2e2b85e098, 0xf2e39ffbd1ff1a01,
    0x488dbab22d184e5a, 0x49b0271d6dae85d7, 0x93b5c70d23be268d, 0x00295a8bb57cd835,
    0x380cf3c45d739b96, 0xa5f0bf4856da2f4c, 0x227f8806fbad3f0c, 0x0a26b3c81ce8cb8d,
    0xa7eb4de895d74c64, 0x5edef72bcd036a47, 0x9d5b2c892b061447, 0x592aeb0d528577d8,
    0x186be456a130c279, 0xdcbd4b800d6f462c, 0x3be439faca91aa6a, 0x8b62cbaab538b123,
    0xbf654c6989b57bda, 0x58ce67bb724838d9, 0xcf8d20ee56ef3dc1, 0xe6d4e07a4af36987,
    0x494499a73427b3f0, 0x98386c69453d1090, 0xd9fd0926a9dde913, 0x6eb82e6da2b7d466,
    0x2b45e161bf33ee07, 0xfee37c8596f7375e, 0xda9ac142d8cea9ef, 0x37a4a3e70c3e763d,
    0xdedce4fe691d3d5b, 0xfad0715326d5c393, 0x9eaad49abc18bf12, 0xc81d0b0ebec17384,
    0xb8cf55a5a71ced26, 0x7dd5d35c36e29bcb, 0xcdd3c29b19317039, 0x4651e4311b7e1d95,
    0x4c5ba00cef21dd6d, 0x8a3d2e347ecaf0f2, 0x4ecc303940113aaf, 0xfbfb349e6bca708e,
    0x4b5be768897d385e, 0xc8642afe0097cee9, 0x9cfcf891619d40e4, 0xae084c5c38d18997,
    0x902451bf84da98a7, 0x9fa3006f391a97ea, 0x714d8ec6abb9b286, 0x6e5ba10508bc0e3d,
    0x73391552c9096717, 0x5b51df4006b812ad, 0x7e990257dd5c1300, 0x4b4d486f51df9b63,
    0xb06406a2d6cf9ed2, 0xc67b214505b7e986, 0x3115c6090720f198, 0x2ca06c7003f77f61,
    0xe6c4e6c54f930a07, 0xb3174deebf7f167a, 0x9e749cdc739d6733, 0xc06600864e981e51,
    0xf51dc9477751754e, 0xd909b6698b77def4, 0x3608d1db18afa665, 0xa448dd4deb189ba6,
    0xfd49192f706ca03b, 0xea5855016578adae, 0xe94bfe23c4aa2626, 0xed725e8fa0ae6a03,
    0x82af0e5b88bca897, 0xf34026cdf8668ec8, 0x6e18856601558abc, 0x2922d233413a5100,
    0x59334e58f9fb8ba7, 0x829242810d95ffe3, 0xa48ccef44df8f0e9, 0x8fc0ac336f1ed91e,
    0x8a84b337b0675e10, 0xb44243ad28139ef1, 0x9dc2e353e75c60c8, 0xae46054f03a1ea7b,
    0x954ac8064a0fd23c, 0x8727e4cf7c2b211a, 0x7a8da8e9eeaadaf6, 0x1c63423abd642ebf,
    0xd5d99abb39c833db, 0x8fbb5505bccc250e, 0x48a7af5f27ce5b58, 0x56b259f9bae91cc2,
    0xa5e06af20ea56107, 0xb97e34c9a89fb8c4, 0x6e704f47b80c010a, 0x33121c38b2d6334e,
    0x0a488f0b7cb39ea4, 0xe8fceae6926ab3bd, 0xb4b35afbb3c86249, 0x31cf43c59feff138,
    0x6d8599168c7cdc9d, 0x461c2f672d56eac8, 0x650eec30b3428186, 0x4b5f789fa1ebca34,
    0x369693f2e0bab7ed, 0x3c0ae4f27f182873, 0xdd13ad617b035826, 0x908c63921678d22f,
    0x66a59a1acfa192c2, 0xf530e71d9d43d126, 0xcccf55fd840477b5, 0x491a7565cca6542d,
    0xd1c5c3e6944b6e5a, 0x038055bf9b4f4b8a, 0xb835ce063fd90b83, 0x5d060b6267bda18a,
    0x5703ddcff4cf0861, 0x68e2875719e4207a, 0xd947b751753aa2de, 0x483adfc0f1db770f,
    0xc933e87148296b63, 0x55651dbcbd2d6135, 0xe1ef7a10afe48a63, 0xbd9c869442eb1f3d,
    0x906900cbc84e57cc, 0xd776e553bceee8e9, 0xec625fa34e8edd66, 0x0300bddd5d1886ff,
    0xdef4303aa6cd845c, 0x92efe6cca286d9e7, 0xf740e57b5b4ffd10, 0x6607cbfb5d5fd25b,
    0x442008210e95c2da, 0xf2d208cfa94b59c6, 0x55f3fb8c05be2320, 0x00d52a4a63d0520f,
    0xf35d90ede75d188b, 0x191f4933bd7de9e7, 0x6fd103be90477da0, 0xbc1362eb1b485c2a,
    0x25875324c0762367, 0x9299682ebe2a70ee, 0xb2f10a8c948f8cf5, 0x283d53ff7bce1a7c,
    0xfca520e2ee167caa, 0x4bb48803c2699d4c, 0x47b4eddae0676970, 0xbc06c1280dadf54d,
    0xa18e487ebfc930fd, 0xe6865069b7e08b35, 0x44a2c876a12be4ae, 0x24b274024bad2903,
    0x3df2272bf906c44a, 0xeb5d11e0f594c766, 0x5f0cd8a78e9c28a4, 0x67815ec0d577f79c,
    0x5111390e925a310a, 0xa260fede0b428424, 0x661e180f7005a6ef, 0x21cde86260eb1099,
    0xdc9faf55b358afa2, 0x46548962e354b9c3, 0xc842f605af40790d, 0x3187e46007c337e4,
    0xe999c5a07c48c765, 0x22c4eb61ce5abe1a, 0x2054a8880ca0fc02, 0xa94a3e7386496442,
    0xa286e38ed2efc9ac, 0x7b4624673cb45a1d, 0x7d93cc5a2a337caa, 0xca5699346a8deacd,
    0xea99b4c105062975, 0xf75a9880534c8cee, 0xf6d2be7ac2b9ce72, 0x56a39f9869fa17df,
    0xf07651330cf08cc5, 0x4bb84cc027842637, 0x43b4b0e619ee9a51, 0xe05c340924b52a4b,
    0x78864cd4de532f74, 0x5003551a4e0b6d4a, 0xa97b484cd309b76b, 0x5e962231091d0600,
    0xd8ee853156b43b63, 0xccb1651e1da883d0, 0xb0bdc94b51173774, 0x1cbacfcf859f5e8c,
    0x33e9c6f78bd3949b, 0x85fb578cbadb02f8, 0x68e0639c395c79d5, 0xd8d4ee137bfcc10e,
    0x10a56b8626671c14, 0xf15077f42dd72b17, 0xb6b1850d745d0e34, 0xb3317b83f7490098,
    0x1c9a0acc0f8aa076, 0x05088231fb7dcb7f, 0xd4b6bba252f14a05, 0xba68a66f63c4b612,
    0x1db2785dff8d61a0, 0xd0535b81ace43deb, 0x228d0a05be2fa8a2, 0x37a881308f71fb3f,
    0x2d614145c9896323, 0x6ee57dbe82f3f5df, 0x9fc06a895e2a99df, 0x95af83c35ce07c58,
    0x0b1532e7f743c86b, 0xb4667c5cc56542ce, 0x0fbfb1ae95889512, 0xe5c8ab6897deb8ca,
    0xeca0eb2ab7f484d9, 0x7a3c10b114a9b5c4, 0x8166a3ea2e65954f, 0x248fbf267abec8c9,
    0x572a84b4f87fb9ba, 0xd37312990d802cbc, 0xf6549a6d3c7b428a, 0xa993ab149ae041dd,
    0xc4567e0a37027344, 0x13b32e0f6daaefa8, 0xf940eb0a73ba3243, 0xae20da2bc2452710,
    0x11edde66dc9cd4ec, 0x11e5379f94561085, 0x017ce14f960bf3f6, 0x27a378a9da834769,
    0x3437ddd2efc7c994, 0xdc3e2fe3b97af0e7, 0x1b1765b5fd9929d8, 0x404ab40ee1c8bd97,
    0xdbd051fc70aa1dfd, 0x978880d837bee73e, 0x30f6505a72b78a57, 0x78db5431f4c10a0a,
    0x2e1b833ba26959ca, 0x71a86ded8933d3e4, 0x57356759c38a4ac7, 0x9f5b01846bad6760,
    0x9e1f4a29710d9fb2, 0x6a186e6cd50a1118, 0x8c121e99b0bbbd56, 0x59158439564eea64,
    0x5dd821da7c9351dd, 0xa4d38736e70989e2, 0x6f4f2310b45433c9, 0xa0b65deb4c6c960d,
    0x11ad025d46259e14, 0x24ef7fb87dbd2d06, 0x7437fce4723be50c, 0x656f9a3094075637,
    0x0d80cb04c5023ca8, 0x100c5bbeb0cc4815, 0xcc76d38bf5b3876e, 0x2f6c7d1b4ccd0aa6,
    0x3a6ed74fa89a4c87, 0x2cd5eea6986b751a, 0x8412dc011c649da3, 0xadc7669bbc2bc1f6,
    0x6a805d2b28ffb0bd, 0x35dd69320baa45ba, 0x1a4194e364a3d408, 0xfdf177e9a18775dd,
    0x8bd68db7ae43053b, 0xd3aa859720c504d2, 0xcf0704640f9ca541, 0x0f1f70829827e243,
    0x6e12080917c68ea4, 0x6bcf55ca0bb67b18, 0x47877a531be4b5f3, 0x712fcf8bc6a8fb31,
    0xdeef895d2694cbfd, 0xe28c62bdede9a4ac, 0xd3744a8ba257f228, 0x396b450ef56db3ac,
    0x217dea24db840a68, 0xfa369978f4e81cf3, 0x77d8792d244a6e55, 0x8e3cc714d98929b6,
    0xb3b984df0cb1e9f0, 0x41992dace30d0f72, 0x439951d9078c737e, 0x1e96d60fe551e405,
    0x86470cace807ccd1, 0xdba4ea80d25e6835, 0x54c11af6e5786c1d, 0xca4fd58abd9c3c6c,
    0x372722d8b6bc506e, 0x086c4d2a2cbd30d0, 0x212d5214d6e2b5cb, 0xc805ccf856b5552e,
    0x45ee4f2473dc1603, 0x04c47d4b87febfb0, 0xef1b4e01b0d52a92, 0x4bdfd352806ae272,
    0x6091a2fe71f8bc2d, 0xd22e30ba2dc51400, 0x9515567445a5b352, 0x0b5a5acabdd39b61,
    0x5482d8955a734860, 0x5022e92ccaca1a72, 0x1369d71d59057d23, 0xdb1f80e4b9824e95,
    0x93f1224cda9252db, 0x542d50162700e8e0, 0x1054767f12929219, 0x152af78a4e410004,
    0x7b59b2ce798792f5, 0xca29f94aba09cb39, 0xf4b8a184136322d6, 0xd207efb9c216fffa,
    0xe921ec2dd9afd7f6, 0x3b6999e5dc3d8d64, 0x17dc999a1792922a, 0x99b6c6ca99dae882,
    0x6839a0b3a45a2ef1, 0xe20bb33b4ff32c97, 0xc0a21237792c08ef, 0xc2de9d4ed1542a1b,
    0xc9ecadaf1d0ab051, 0xb7f401756fe52e02, 0xd84e2e1fa4390869, 0xcf72862d2c5aa7fa,
    0xc69461db2a01db01, 0xb084abc61622c2dc, 0x3770a5878aea2297, 0xe7daff7ae34a398f,
    0x93cc2dee307dbac3, 0xc7644b9bbf35fb16, 0x1d275fe33588e75d, 0x644960d4b33c22b3,
    0xb09c69a714ca7f12, 0x0fb3f5d53954d7e1, 0x988ad6f4791e6cd7, 0xc4b809f65f820024,
    0x58bed481cf220ba0, 0x9bd4a8c57f7ff28f, 0xbc48216e7492f99c, 0xe0425e4152d96d71,
    0x26873c90124fa912, 0xd2a82968f95f83c8, 0x86b1890cc164373d, 0xe512f974f010a726,
    0xb0d945409c595d82, 0xa88b66ff8251fabb, 0xafc96239ec31699c, 0x6c29f7c09e947e5b,
    0x354c4d90ace17a5d, 0x066b23f97f844efb, 0xfd4e93de87b4dd2e, 0x3e0b8fb51406125d,
    0xb37a76f5346337c8, 0xf1f8f75333b4756b, 0x227804fa17091929, 0x5e88fed30e6fea41,
    0x9f860e70d4729fde, 0xf2b80b9ff144bb9e, 0xa7bec7979e7ac22c, 0x59bf103be825072d,
    0x627ab85eb6a79778, 0x6744973193868324, 0x0732e46550910b51, 0x9625d6a85c04b80b,
    0x899ced5939940e42, 0xbaf104bf8557f6bd, 0x2884ec8df17df3ca, 0x54f9d785da123c2e,
    0x73533cbdd92acf41, 0x7b361444f922016c, 0x1aa05a2f4148e8e9, 0xf8d8a5f4c999b059,
    0x0d3f38215947d9ee, 0x731e6eaf701b5cf0, 0x691ed3652917b567, 0x3ffa875aa3948466,
    0xd3096a63fdff570c, 0xa0fdc7336e9a6eaf, 0xb161280bcefcc691, 0xa980dad6c2e3ce2a,
    0x6e87b993a2b6b176, 0xd01af5d5c34c319d, 0x8b79723f1413c8f1, 0x4ca4c97fd11dc81e,
    0x8580729a906ee4d1, 0x6d340421a60f0744, 0xb6a5c358b6f1e42a, 0x03b181b42cf301df,
    0xbde47e4d50ed162e, 0xbfbaf2251c348142, 0x8bf376195266d0c9, 0xb2f9d2bd949495f1,
    0x170dcd2dbd58b38f, 0xe6c74f6b4caacdaf, 0x971436b4fbb8dc0e, 0xe056a717efdaf19a,
    0x6a558985ac8b49b7, 0x2eefd8c52cf47994, 0x67953c34bf61c940, 0x53be173809dae147,
    0x8a7acc825c269e69, 0x0d3c8a524a6a5636, 0x5a527d1e4b0c6ba0, 0x6546d4bc7cba4375,
    0xd932a77e42bd0bb5, 0x80c85d022cd2084f, 0x357bc02c953590f6, 0xc583424a3c6f9356,
];

/// Key for a piece of `player` standing on `sq`.
#[inline]
pub(crate) fn piece_key(player: Player, piece: Piece, sq: Square) -> u64 {
    KEYS[((player.index() * 6 + piece.number()) << 6) + sq.index()]
}

/// Key for a set flag bit (turn, castling, en passant, has-castled).
#[inline]
pub(crate) fn flag_key(bit: usize) -> u64 {
    KEYS[bit]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_stable() {
        // First and last entries pinned so an accidental regeneration shows up.
        assert_eq!(KEYS[0], 0x1a7bb1d32bc5b417);
        assert_eq!(KEYS[999], 0xc583424a3c6f9356);
    }

    #[test]
    fn test_key_indices_disjoint() {
        // Placement keys never reuse the flag-bit region of the table.
        let lowest = (Player::White.index() * 6 + Piece::Pawn.number()) << 6;
        assert!(lowest >= 64);
        let highest = ((Player::Black.index() * 6 + Piece::King.number()) << 6) + 63;
        assert!(highest < 1000);
    }

    #[test]
    fn test_keys_look_distinct() {
        assert_ne!(
            piece_key(Player::White, Piece::Pawn, Square::A1),
            piece_key(Player::Black, Piece::Pawn, Square::A1)
        );
        assert_ne!(flag_key(0), flag_key(6));
    }
}
