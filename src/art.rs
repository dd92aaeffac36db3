//! Static branding shown on the welcome screen.

/// Globe rendered in ASCII shading.
pub const GLOBE: &str = r#" xxxxxxxxxxxxxxxxxxxxxxxxxxxxxx+xxxxxxxxxxxxxxxxx+x+xxxxxxxxxxxxxxx++++xxxxx+++xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx+++xxxxxxx+++++++++++++++xxxxxx+++++xxxx+++xxxxxxxxx++xxx+++xxx++++++x+++++++++ 
 xxxxxxx+xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx+x++x+xxxxxxxxxxxxxx+xx+xxxxxxxxxxxxxxx+;;+xxxxxxxxx+xxxxxx++xxxxxxxxxxx+xxxxxxxx+++xxxxxxxxxxxxxxx+++++xxxxxx+++xxx+++++xxxxxx+x+++x+++++++x++++x+++++++ 
 +xxxxxxxxxxxxxx+++xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx++:      .x+xxxxxxx+&X        ;xxxxxxxxxxx+++++++++xxxxxxxxxxxxxxxxxxxx++x+++xxxxxxx+++++xxx++++++;+++++++++xxxx++++++++x++++x+++++++ 
 +X++++++xxxxxxx+X+xx+xx+++xx+xx+++xxxxxxxxxxxxxxxxxx;.     :xxX&&&&&&;X+xxxxxxx;; &&&&&&&&   ;xxx+xxxxxxxxxxxxxxxx+xx+xxxxxxxxxxxxxxxxxxxx+++xxxxxxxxxxxxxxxxxXxxxxx++++;;+;+++++xxxxx++x++++xxxx 
 xxxxxxxxxxxxxxxxxxxXXXXXXXX+XXXXX+Xxxxxxxxxxxxx;    :&&&&&& ;+.  &&$& ;+xxxxxxxx; &$&&   :&&&  ;xx+.   ;xxx+xxx+xxxxxxxxxxxxxxxxxxxxx+xxxxxxxx++x+++x+xxxxxxxxxxxxxxxxxXXXXxXxXx+++xxx+++xxxxxx+x 
 xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx++$&&&&      &&+xxx x&$& +xxxxxxxxX.;&$&  x+  &&&+.xx;$&&$    :xxxxxxxxxx++xxxxxxxxxxxxxxx++++++xxxxxx+xxx++++xxxxxxxxxxxxxxxxxxxxxxXx+xxxxxx+++x+++ 
 xxxxxxxxxxxxxxxXxXxXXxxxxxxxxxXXxxxxxx;  +xxx+$;x&&&X x:+&  ;xxx:.&$& ;xxxxxxxxx X&&& +xXx &&&& +++  &&&&&&;x;. :xxxxx+xxxxxxxx++++xxxxxxxxxxxxx+xxxX+xxxxxx++++x+++xxxxxxxxxxxxxxx++xxxxxxx+x+++ 
 xxxxxxxxxxxxxxxxxxxxxxxxxXxxxxxxxxxx;  && +xxx+; &&&&   &&.:xxxx;.&$&;.xxxx;..;+ &&&& xxx+ &$$& XX; &&&&   :+;&&   ;xxx+xxxxxxxx+x+xxxxxxxx+xxxxxxx+X+xxx++xxxxxxxxxxxxxxxxxxxxxx++x+++++++++;+++ 
 xxxxxx;xxxxxxxxxxxxxxxxxxxxxxxxxxxxx;&&&& :+xxxx: &&&&&&x&&.;..;+ &$&& xxx; && .+&$&x.xx+. &$&& x+ &&&&.:XXXx; X&&& xxxxxxxXxxxxxxxxxxxxx+xxxxxxxx&x&xxxxxxxx++xxx++++xxxxx+xxxxxxxx+xxxxxxxXXXxX 
 xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx+:..;;   $& ;x+xxx &&$&    x+.&& : &$$&     &&&  &&$& .x;  &&&&..+..&$&+ +xxx;..&&&& +xxxxxxx+xxxxxxxxxxxxxxxxxxxxx& ++xxxx+xxxxx+++x++x++++++++++xxxxxxxxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxX:.&X   ;; && +xxxx; &&&& ;;   &&.&&&&&&&&&&&X:;&&&&&&&X+X&&&&+ :x; &&&& +XxX; && &$&.:xx+  :x++++++++++++++xxxxxxxx& &;++x++++++++++;++xxxxXxXxXxxxxxxxx++x++++++x 
 xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx;&&&&&&    && xx+xx :&$&& +&&&&;::         .:;;:      +&X;   .;:  &&&& :x++. &&  &$&$ x+.&&  :xxxXXxxxxxxxxxxxxxxX$& &;x+XX++XX+XXXXXXXxxxxxx++xxxxxxxxxxxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxx+. ;+x: &&&&&&&&  & .xxxx: &&&&&X.   :;;;;:::::....::;;:+;;;;:.:;+xxx&&&&&&+  .. :&X ; &$&& x: &&&&&+xxxxxxxxxxxxxxxxxxX&; &.XXxxXXxxxxxxxxxxxx+XX+XX+x+xxxx++xxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxx+  :&  :x: &  &&&&&&&& ;xx+&$    .+xX$$X$&&&&&&&&&&&&&&&+x++x+:x$&&&$+:.    ;&&&&x&& .+x &$$& : &&    x++xxxxxxxxxxxxxxxx$&  &+:xxxxxxxxxxxxxxxxXxxxxxxxX+xxxxxxxxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxx;.&&&&&&    X&    &&&&&&;xx++;+$&&&&&&&&&&X$&& .&&     X&&&&&&&&&&   &&&&&$$+:   .$&& ;xx &&$& x&;.+xxxxxXXxXXxxxxxxxxxxxx&:: &:xxxxxxxxxxxxxxxxxxxxxxxxxxxX+X+x+xx+xxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxx+&X;&&&&&&&  ;& ;;   x&:;xxX&&&&x          +&&&: &&+     &X&$XX$$&&&.    &&&&&&&$+. ;&+xx.$&$&&& .++:      :+xxxxXxxXxxxxX& x &;+xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxXxxxxxx+xxxx 
 xxxxxxxxxxxxxxxxxxxxxx;::.  .&&&&&&$&X xxx;..:x&&&&   .:.&&&&&&&&&:       &&&.   $$XXX&&&&&&+:    .  :&&&$+;+xx::&&&& :;  x&&&&&&$  ;xxxxxxxxxx&;:+ &&:+xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx+xxxxxxx+x 
 xxxxxxxxxxxxxxxxxxxxxxxxxxx+:   &&&&&& :xxxx$&&&     :.+;;;:         :x&&&  ;:: +&&X&&&$    ..  ......  :&&&$xx+;&&. +: &&&&&&&&&&&& :xxxxxxxx$& X+ && +xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx+xxxxxxxx 
 xxxxxxXxXxxXxXXxxxXXXXXXXXXXXxx;   &&&&+XX&&&+    .:::: ::   .:+;:&&&&     :::::  &&&    ;+;;+&&X:;;:...:  x&&$x: .:x: &&&&&x      :&;;xxxXxxx& .X+ &&;:+xxxxxxxxxXxxxxxxxxxxxxxxxxxxxxxXxxxxxxxx 
 xxxxxxxxXxxxxxxxxxxxxxXxxxXxxxxxxx;    ;&&&       .:.:;:;:+Xx.:;.+: :+X+&& ::;;:.   : :::..;;:.;.:;;xx::.;.  ;&&$xxxx &&&&+ .+xxxx+ && :+xXxxX& xX; &&&:xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx+xxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx&&&      :;  :.::::.:;xX:;;:: ;+:x;:x:+;::;;:. .+;xx;;;.;.++;;xx:::+&;    &&$xx &&& .++:.:xx: &&&$+Xxxx&x xXx &&&;;xxxxxxxxxxxxxxxxxxxxxxxxxxxxx++xxx+xxxxx 
 xxxxxxxxx+xxxxxxxxxxxx+xxxxxxxxxxxxxX&&.   : x$XXx;..;:.:::..:.;::.. . :; :.;::;.::;:;::+XXX++;;; ;+:.:$. .$X. . .&&X &&. xx+X& .+;&&  :+xxxX& +xx; &$&x:xxxxxxxXxxxxxxxxxxxxxxxxxxxxxXXXxxxxxxxx 
 Xxxxxxxxxxxxxxxxxxxxxxxx+xxx+xxxxxx&&&   ; . &xx+Xx:.:.:;...::::.;.;:   :.;;x;;x$+.:::;;;:..+;+;;X;+;:xxX+  .;&..  x&X &&     &&+  . :xxxxxx&; xXX; &$X& +xXXxxxxxxxxxxxxxxxxxxxxxxxxX+xxxxxxxxxx 
 xxxxxxxxxxxxxxxxxx++xxxxxxxxxx+xxX&&    :;.;X&X;::;;;:::+.:.....:;++X&$Xx:: :X  .::;;.;;+;;+:++;;;;;;:x&;;&x .XX++.  &$:+&&X&&&&&&++xxxxXxx$& +xxX; &$X&;;xxxxxXxxxxxxxxxxxxxxx+XX+++xxxxxxxxx+xx 
 xx+xxxxxxxxxxxx+xxxxxxxxxxxxxxxx$&&    X. ;& : +++;:++; x.;;X+;+...   ..;;X&$xx+&Xx$&:;:::;::;;+::;+:.;$x:+:;X;;XX;.  +&; ;&&&&   &xxxxxxxx& .:+xx: &XX&$:Xxxxxxxxxxxxxxxxxxxx++xxxxxxxxx+xxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx&&+    :+$&& .x;:;;..;..$x+x: .   xXX&++&&$+;;x&xx   ..:;:;;;;;:+X;::+x.;+.:$&&$+ :+$x; x&X:    :xx++xxxxxx$&.+;xxX+ &XX$& xxxXxxxxxxxxxxxxxxxXXxxxxxxxxxxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxxxxxxx&&:    x+:$&  &+++:.;+:++x;. ++:XXX$XXX+:    .   ++.:;:;;:;::+;Xx++x;;;+:;;+    &&x$+x: ; +&$xxxxxxxxxx+xxxX&.:;+x+X; &XX$&&:xxxxxxxxxxxxxxx++++xxxxxxxx+xxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxxxxxx&&     +; ++  &$++::;::x;::.;x:;X;;..    .:::::::;;;++;:;;;;::+x+;;;+++;;x;:; &; ;.+.&;;:..  &Xx+x+xxxxxxxxXX$ x++xxX+ &XXX&& xxxxxxxx+Xxx;x+xxxxxxxxxxxxxxxxxxxxx++ 
 xxxxxxxxxxxxxxxxxxxxxxxxxxxx&&   . &&;x&+.X;+x. .+;;.;:  +.:+:::::..:::;::::::..:.:::+::;x;++xX+x++;+;+.+x:&:x&&  x.xX&$$:.&XxxxxxxxxxxxX&.+x+xXx$+ &&&&$&:+xxxxxxxxxxxXX+Xxxxxxxxxxxxxxxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxxxx&&+ .:  &+&&+&X&x; ..+:. ;:;x;+XX; ..:::;::::+::::;:;:;:::;;;:;+X+x;Xxxx;;:+;:  $& &; ;+ .X  &++&Xxxxxxxxxxxx$& ;+:xxxX  :  $$&X;+xxXXXxxxx++xxxxxxxxxxxxxxxxxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxxxX&   .. :& .& ;x: :     ..;. :+;. .::::::::::.;:;;:;;;:;;;;;+;$+;x;x++xxX+++:X;:; &+&&       :; &$&++xxxxxxxxX& +xx++;+& x&&&&$$Xx+;+X++XXXxxxxxxxxxxxx+xxxxxxxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxxx&&  ..+ x   xx ++;:+x+X;x+:x;;;;..:::::::::;::::::::::::::++;;;;:+++$:::;;;;+X;;.   $ &&&&&$  :   &&+xxxxxxxx$x:++++xxx& X&$XXX$Xxx++xxxxx++xxxxxxxx+xxxxxxxxxxxx+x+xxx 
 xxxxxxxxxxxxxxxxxxxxxxxxx$&  .;:: xx   &++.:::.::..:x:+;x :::;::::::::::;::::::;;:;;;+;:;:::;;x::;;;:.;;x;;; &&&&X&+$&&   X  &:+xxxx+xX& ;++++xx+$ $&XXXX$$xX++xxxxxxxxxxxxx+xxxxxxxxxxxx+xxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxx&$ .:..:. X  :& ;...:.:.   &...; .;::;:;:;:::.::::;;:::;:;;:::;;:;;:.:;;;;;;:+;.:: &&x $X$$XX&&& &&&&X;xxxxxx$;:++++;xx+& &&XXXX$XXXx+++xxxxxx++x+xxxxx+++++xxxxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxxxX&  :.::;:...  &:X..:..;x+x+:::;x:  .;::::::::::::;::;:;;:;;::;;::;:;;;;::;:;:+xx.  &&&X$$XXx$$X&&&$$&X+xxxxxX$:;++++;x++& &&XXXX$$xx:X+xxx+xxxxxxxxxxxxxxxxxxxxxxxx+xx++ 
 xxxxxxxxxxxxxxxxxxxxxxxx&& .::::.:::.x+ x::.:;xx+.::;:$;. $.  .;.::::::::::::::::;.::;::;:::::::+;;;;:x;  &&;$XXx$&X+x+Xx$$$X& ++xxxX&:;++++++xxX& &&XXXXX$$$X+;++xxxxxxxxxxxxxx+xxxxx+x+++xxx+xx 
 +++X+XxxxxxxxxxxxxX+XxXx&  :;::.::::  ++:.+;+: ::..    .x&;:x. :::::::::+:::.;:::;+::;::;:::;::::;::;;+: &&:$$+;xXX;x$x+xX$xx&&&;xxx$x:x+xxxx+x;;& &&XXXXX$XXX;Xxxxxxxxxxxxx+xxxxxxxx+xxxxxx+xxxx 
 xxxx+xxxxxxxxxxxxxxxxxxX&  .:::::::;..  +;:..  x   ++xX+  ;x&&X;:.: ::::::::;:;:+;:::::::;::;::;.+::;;:: &&+XxXXxx$$+++&xXXX$;&&:xxx&:++x+xxx;+XX& &&$XXX$X$X$Xx++xx+xxxxxxxxxxx+++xxxxx+++xxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxx$&  :.::::::::;:. . +$X;xxX+.;+.:....   ..:$+ .::::::.::;;::;:;:::::+;+;;.+:;;;;+;&&+$&xX$XXxX&$X$$  &X&x:x+X:;x+++x++x+xx& &$XXXX$xXX$xX:++xxxxxxxx+xxxxxxxx+++xxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxx&& ;+.:..::::..:;;..  +;   x:......   .::.+: + ..::::;+::::::::;::+:::;::x;:;+;:  &XX&&&&&&&$&&x X&&&XX&$+x;X+;x++;x+;x+Xx& &&XX$XXxX$XX$$;xx++xxxxxxx++++++xxxxxxxxxxxxxx 
 xxx+x+xxxxxxxxxxxxxxx+x&& ...:::::.::::.:::;:: x++. : ..:++$;.   +;X$;;.:::::::;+x+;:;:::::::;+::;+&;;:  &&&&&$&&xxX+X;&&&&&&&&x++.&X.+xxxxx;x;xx& &&$;$$X$xXx$+;X+xxxx+++++xxxxxxxxxxxxxxxxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxx&& .;::;::::;;::..::..:.:::&&xxX$+.&+Xx+:;+.::+;....:::::.:;;:::;::;::::::.::..:.x&Xx+;:x&x&&&&&&&&&&X&&;x;+&& +x++xx;xxxx& &$$x$XXXXXx$X&::++x+xxxxxxxxxxxxxxxxxxxx++++++ 
 ++x+x+xxxxxxxxxx++xx+xx&& :.::.:.:...:::.....:++::. ...  .: + .X+ X;$+;:: ...:::;.:++;;.:...:::::::::: ;x:     :.x+ :.;.x::  +  $.$&& ;xxx+x+xxxx$ &$$x$$XXXXXXxXxXx+xxxxxxxxxxxxxxxx++++++xxxxxx 
 xxxxxxxxxxxxxxxxxxxxxxx$& ::::::.:::::::;+;:+;....:. +:.: ;..x$x&&   xx+;X&.:::::::. +++;++;::::::;::;:;:$+. ;+X:;: :. .+x +;.. & &&$$:+xxx+;xxxxX &$$x$XXXXXxX$x& +xxxxxxxxxxxxxxxxxxxxxxxxx++++ 
 ++++++++x+++x+x+xx++++xX& . ::::::;:::::.:....:::.. ;;:::$$&&:   :X   .&&$Xx. .:;;;....::..:;;:::;:::+::. +:.:;.:+.;;.x+ +:+:. xx&&xX&.+++xx++xxXx &&XX$$X$X$Xx$x$&.+xxxxxxx+++++xxxx+++++++x++++ 
 xxxxxxxxxxxxxxxxxxxxxxxx&   ::;::::..::::::x:::.:...& x:;:.  ..:: ;&&;    . &+::::;+;x;:;::;+;:;;;;;xx::. .&& ++x;.&+;&+. ;;:. & &$xX&;;xxxxxx;xX: &&XXXX$xxXXXXxx$+;++xxxx+xxxxxx+++xxxx+++++xxx 
 xxxxxxxxxxxxxxxxxxxxx+xx&  ::.:..:::::::::...:::;: x;  ........+.:..:;:::.:  +$;...::::::;;;:++::.....:;;;: :&&;.&.:  .X ::;.  :&&xXX$& ;xxx+XXxX: &&XXXXXX$X$XX$xx$+;+xx++xxxx+++xx+x++++xxxxxxx 
 xxxxxxxxxxxxxxxxxxxxxx++&&  :.:.:::::::::.::::..:..X+ :::.;+:::::.;: : .;;;: ;xXX: .:::;;;.;:;;;;++++:..:..:.  .;:.;::;X :. .  &&$xxXX&::xxx+x;+X ;&$XXXXXXXxXxXx$xx&:+xxxxxxx++xx+++x+xxxxxx+x++ 
 xxxxxxxxxxxxxxxxxxxxx+xxx&  .::::::......:::::::: &:  ::.:.....;::+.::;+;..:;: ::X$.   ..::::::;::::; .+;;::::::;:+++:+X:::+: x&&xXXXX&& +xx;X++x:x&&XXXXX$X$XXXxXxX$x:+xx+x++xx+++x+++xxxxx+++++ 
 xx+xxxxxxxxxxxx+xxxx+xxxx&& .:::;:..:::::......::  & ..;::::::.: .::;.+  .::..     &X:x; .;++;;.::.:;:++;++;+;:::;;::::X+;:: .&&$$X$X$$& ;xx++xxx x&&XX$XXXXX$X$xXXXX$;+x++++x++x+xxxxxxxxxxx+xxx 
 +xxx+x++x+++x++x++xxxxxxxX&   :.:.::::::..:::.:::. .&:  .:.::.:..:..:..+::. :&;xx.+  X XXx  ;.:::;:.::;:.;;:;::;;::.:..+X.+;x&&&&&&&&&&&&&&&&&&&&$ &$$X$XXXXX$$XXXxXX$$ x;X+xxx+++xxxxxxxx+x+xx+x 
 xxxxxxxxxxxxxxxxxxxxxxxxxx&&  .::;.:::;::::::.:.::..;;+  .::::;;;..:.. ; . .;:.;xxx.+&:&$xx.::::::::;::;:x+:;:;+;;:;;  +;.; X                     &&XXX$$$$$Xx&$&X$X$X$X;X+++++++++xxxxx+++x+++++ 
 &&&&&&&&&&&&&&&&&&&&&&&&&&&&&  ........::::.:::::.:. .&+.  . .;:.xx; .;x+;;;; X:+; xX+;&X; .::;::::.::::x:::;:::.;:;. +;;:&&&&&&&&&&&&&&&&&X&&&&&X&&&&&&&&&&&&&&&&&x+x+&+&&&&&&&&&&&&&&&&&&&&&&&& 
                             .. ...:::::::.::...::::.;  &&& :  ::: ;:x;    ..:x; x $x;.x   .::.::::::;:;;;:;::;x::;;. x&+X&&                 .     &             :&&&&&&&                          
 &+Xx:+;::;;x+xx+.X$X$++&&xx.$&  ;...::..:::.::::::.;;.   &&&x   +;: ++;;$x$;x+++++x+.&: ..x:;;;.;:::.:.::;;;::;:;;.  &XXXX:&&&&&&$$+     :    x+  & x$+&Xx;.              &  :: :+.:+x;Xx;:$;+xxx 
 :;;; ;:;:::. .. . .:. .   ::X+&  ::. ..:.:...:....:::...   x&+x  ;;;::;.:+;:.+++;:: .   ::::.::::;:::;:;::::.:.:.x &:X;$&;$ .:   +&&&&&&&&&;&&&Xx$x&          .x &.;  & x&:& .+&+x;:; ... :x.;+;.  
  . x++ +: xXx;Xx;x+:x&x$&X&X$:.XX .Xx ..:;;::::.::::.:::.. .x;&x+.:.:.. ;;;;;;+:x . +:XX;;.:::;::::::::+::::::;: + &$                &&;$ &&$&:&&&&&&&&&&&&&&:         x $X&:;..x:;xxx;+x;+::  .  
 X&&x:&$&&&&X+;X&Xxx+X+       +xX&&   Xx. ..:::;;::..:.:::;  .&X .:x;:;;++;;++;+:+;+xx:.:.+:+::....;::.+.:;::::.   X &&&&&&&&&&&&&&&&&&. .&&&xX:$&   +&&&&&&+. X&&&&&&x ;&;   .X$:x;      :::&$x+$ 
 :. ..           xX..  :;XXX$+x;+:X&    ++;:.:....::::.::.: .xx;::::...::++;::X  ;+::.:..::..::::::.::::;.::;:+. &$+ X     &&&$+;;;;+++X$XxxXX&&&          :+&&X&$&$$&&&&  $x$;;  xx&&&&&&&+;;;++. 
  .:xx&&+$&&&&&&+ ;+.+:X+;xx&&x+++x$&X  ..:::..::::..::::::  +: ;. :...:   .   x+..;:.::.:::::.:::::;;;:::;:;:. &&&&&&&&&&&&xx&&&&&&&&$&&&&$XXXx$&&&&&&&&&&&&$$$$$$XXx&$        ..        .;+.;:+x 
 &&&&X$$XX:+;;x$$X$&&&&&&&&x  X+    x&$   ....:...:.::.:.:.  +X x:;;;;;++:;++x$;;+;x ..:... .:.:.::.: ::::...  x&+x+x:+X$&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&&x+XX$&.xX&&&&$XX&X$&&XX+x:     :. 
         .       :          ;+Xx&&&&&X&&& . ....:.:::....... ++.::::::::;+++x.  : . ..xX::&X::;;+:::.     ...xx&:                                               X&&&&&&&&& :;$&&&&&:Xx;x$&&&&&&&$& 
 xx+x;.:;XXX+:X$+&:;  .+x::x& $:.. :;     ++:           .... x;;;:;;;;;;+:.. ..  :..:..      .....  X$&&$X&&$+  .$&&&&&&&&&&x&&X:  :XX&&            .&&&&&&&&&&&:                                  
 +&&&&&&&&x+x&&$$&&&&&&&&&&&x ;X$.;  :      :X++XXx+x+;;;    : :;;;:;;:.                 .        $&;. ;&   ;x$&x          $.+. $&&&&: ;XX&&&&$&&&&$&&+&&&$X;.;X&&&X$&&+;:; $&X&&$X&&&$&X&&$xXX;x$ 
                                   ...:;.....     ..   :x&&x$&x;       +:+x$&X$&XX&&&&&&&&&&&&&&&&               : ::;+;.::   ;     . ;&        : ;    . :;$&&      &&$$;xXXXX :X+;;. :x+X$x&&&&&& 
 ;+;+:: xxX+XXXx$xxx;&$$Xx$$&&&&$; :: ..;.::............     . .:;;;;:.                            .;::;:;:::   ..   :..xX&&&&&&&&&&&++&&&&X$&&&$&$;x&&$.X$ +  ;..:.     .   ;$x+ +x&&X:    .:.; X 
 x.&&&+X&&+x&&&&;&&$: .xX&&:+;.  : ....:. . :.............   .: .. ...:::;:;;::;::::::.::.:.:.::... .......;:xX++;;+;: ;            .&X.      ;; .&++x+&&;  :x.&&&&X. $$;xX+.:;.&&$X:+;x$+;;:      
 X&xX;;: .      $$;x&&&X:. && ;x: :;..:;++x++:::::;::::.::++;;:::;;:;;;;::::.;.:;+::.;;;:.::::::.::;;;;;;::::.::+x+$XX&&&xXX$$x:Xx$&:   :;;+&$&XX&&+&&&+ &&&&&.    :&&X.:;:Xx;      .   .+; ..;.;; 
   $  ;&$  ;;x$&      :+;X;  +X$+X;:.:.       .:.....:::;::..::;:::.:;+.;.;:;:;;..;:::;:+:::::::::;;. ::;.::;:::          .+X&&&$&&&x&&&x&&  .:.:;    .:. :X&x&&&&&::.... .$x:xXX&&&xx+XX$X&$&X&&x 
 x;       :.;  :;$&&&&  .;X:;.     .;;;+;+++;+::::::.::::::::::.+::+;;;.;;::::;:;::;+::;:;;;:;;+;;;;+;;;+xx$$x+X+XX$X&&&&&&$$x       . .   ;xX   :X&$. +&&X:   .  x$x&&&&&&+X&x&&&x;xx+   ..       
 +&&&&&&&&&&&&xxX:    :X:   .::.:x+++; .++:::::xxx+xxx+;+;::;;;.....  .: :::..:;:::.::;.:::+;+....;;+;;.       .+$;;+.;;;     .X&&&&&Xx&&&$$&&&&&&+X :&$:X x&&+:.                  .;:x&&$&&&$++X& 
 xx$X;   : :. :$XX;x&;..X;++:  +:.   :;: :              ;:. .:.;.;;;;;;;;;::;;::.:;:::;:;:. ..:;;;:::..+xx+++;x;.         .;.                                   :++x+;:.::.+++;:..          .:;&$: 
      .      .x:+$x:;;xxX&&&&&&$$&$$XX;:::;;;;;;;++xx++;;;;;;;;;;;;;:;: ::::;:;;;:;;;;;;;;++++::::;++;; ::;+;:.:+x+&$+$x&&x&;$&$;;x&Xx;:;:;x+::x+;+x&X&$$$;;$+.: :XX&$$&Xx++:+;++++x&&&&&$++"#;

/// "Welding World" logo.
pub const LOGO: &str = r#"  __       __          ___        __                          __       __                 ___        __      
 /\ \   __/\ \        /\_ \      /\ \   __                   /\ \   __/\ \               /\_ \      /\ \     
 \ \ \/\ \ \ \      __\//\ \     \_\ \/\_\     ___       __   \ \ \/\ \ \ \     ___    _ __\//\ \     \_\ \    
  \ \ \ \ \ \ \   /'__`\\ \ \    /'_` \/\ \ /' _ `\   /'_ `\   \ \ \ \ \ \ \   / __`\/\`'__\\ \ \    /'_` \   
   \ \ \_/ \_\ \/\  __/ \_\ \_/\ \L\ \ \ \/\ \/\ \/\ \L\ \   \ \ \_/ \_\ \/\ \L\ \ \ \/  \_\ \_/\ \L\ \  
    \ `\___x___/\ \____\/\____\ \___,_\ \_\ \_\ \_\ \____ \   \ `\___x___/\ \____/\ \_\  /\____\ \___,_\ 
     '\/__//__/  \/____/\/____/\/__,_ /\/_/\/_/\/_/\/___L\ \   '\/__//__/  \/___/  \/_/  \/____/\/__,_ / 
                                                      /\____/                                            
                                                      \/_/__/                                            "#;

/// Line typed under the banner.
pub const WELCOME: &str = "Welcome to the Welding World Calculator Service!";

/// Globe and logo stacked, separated by a blank line.
pub fn banner() -> String {
    format!("{}\n\n{}", GLOBE, LOGO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_contains_both_pieces() {
        let banner = banner();
        assert!(banner.starts_with(GLOBE));
        assert!(banner.ends_with(LOGO));
    }

    #[test]
    fn test_art_has_no_tabs() {
        assert!(!GLOBE.contains('\t'));
        assert!(!LOGO.contains('\t'));
    }
}
